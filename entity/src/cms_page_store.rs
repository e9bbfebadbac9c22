use sea_orm::entity::prelude::*;

/// Assignment of a CMS page to a store view.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cms_page_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub page_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cms_page::Entity",
        from = "Column::PageId",
        to = "super::cms_page::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CmsPage,
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Store,
}

impl Related<super::cms_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CmsPage.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
