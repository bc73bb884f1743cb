use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::repository::UserRepository;

/// Finds the user's cart, creating an empty one on first access with an
/// identity snapshot from the user directory, and repairing a snapshot
/// found stale. Returns whether the aggregate changed and needs persisting.
///
/// Missing user during creation is an error; during repair the snapshot is
/// simply left as-is (the cart still works without it).
pub(crate) async fn resolve_cart(
    cart_repository: &dyn CartRepository,
    user_repository: &dyn UserRepository,
    logger: &dyn Logger,
    user_id: &UserId,
) -> Result<(Cart, bool), CartError> {
    match cart_repository.find_by_user(user_id).await? {
        Some(mut cart) => {
            if cart.snapshot_is_stale() {
                logger.info(&format!("Repairing cart snapshot for user {}", user_id));
                if let Some(user) = user_repository.find_by_id(user_id).await? {
                    cart.refresh_snapshot(user.snapshot());
                    return Ok((cart, true));
                }
            }
            Ok((cart, false))
        }
        None => {
            let user = user_repository
                .find_by_id(user_id)
                .await?
                .ok_or(CartError::UserNotFound)?;
            logger.info(&format!("Creating cart for user {}", user_id));
            Ok((Cart::new(user_id.clone(), user.snapshot()), true))
        }
    }
}
