//! Database repository layer for the storefront entities.
//!
//! One repository per entity kind, each implementing the fixture core's `Repository`
//! trait over SeaORM. Saves run inside their own database transaction, so a failed
//! child insert or index update leaves nothing behind. Deletes report rows that no
//! longer exist as `PlatformError::NoSuchEntity`.

pub mod attribute;
pub mod cart;
pub mod cart_rule;
pub mod category;
pub mod page;
pub mod store;

use sea_orm::DeleteResult;

use crate::error::PlatformError;

fn no_such_entity(kind: &'static str, id: impl ToString) -> PlatformError {
    PlatformError::NoSuchEntity {
        kind,
        id: id.to_string(),
    }
}

/// Turns a delete that matched no row into a not-found error.
fn expect_deleted(result: DeleteResult, kind: &'static str, id: i32) -> Result<(), PlatformError> {
    if result.rows_affected == 0 {
        return Err(no_such_entity(kind, id));
    }
    Ok(())
}

#[cfg(test)]
mod test;
