use sea_orm::entity::prelude::*;

/// A product attribute definition.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attribute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub attribute_code: String,
    pub frontend_label: String,
    pub frontend_input: String,
    pub backend_type: String,
    pub is_required: bool,
    pub is_searchable: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
