use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::SaltedSha256Hasher;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_stats::GetProductStatsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::get_profile::GetProfileUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::signup::SignupUseCaseImpl;

use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool));
        let password_hasher = Arc::new(SaltedSha256Hasher);

        // User use cases
        let signup_use_case = Arc::new(SignupUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher,
            logger: logger.clone(),
        });
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_stats_use_case = Arc::new(GetProductStatsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            cart_repository: cart_repository.clone(),
            user_repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            cart_repository: cart_repository.clone(),
            user_repository,
            logger: logger.clone(),
        });
        let update_cart_quantity_use_case = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            cart_repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            cart_repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            cart_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(
            signup_use_case,
            login_use_case,
            get_profile_use_case,
            AuthConfig::from_env(),
        );

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
            get_product_stats_use_case,
            create_product_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_cart_item_use_case,
            update_cart_quantity_use_case,
            remove_cart_item_use_case,
            clear_cart_use_case,
        );

        Ok(Self {
            health_api,
            auth_api,
            product_api,
            cart_api,
        })
    }
}
