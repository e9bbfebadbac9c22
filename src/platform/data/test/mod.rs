use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    config::IndexMode,
    error::{IndexError, PlatformError},
    fixture::repository::Repository,
    platform::{
        indexer::{IndexJob, CATEGORY_PRODUCT_INDEX, SEARCH_INDEX},
        testing::{storefront_platform, storefront_platform_in},
    },
};

mod attribute;
mod cart;
mod page;
