use crate::fixture::{
    repository::FixtureEntity,
    scope::{StoreId, DEFAULT_STORE_ID},
};

/// Input control an attribute is edited with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrontendInput {
    #[default]
    Text,
    Textarea,
    Select,
    Multiselect,
    Boolean,
    Price,
    Date,
}

impl FrontendInput {
    pub fn code(self) -> &'static str {
        match self {
            FrontendInput::Text => "text",
            FrontendInput::Textarea => "textarea",
            FrontendInput::Select => "select",
            FrontendInput::Multiselect => "multiselect",
            FrontendInput::Boolean => "boolean",
            FrontendInput::Price => "price",
            FrontendInput::Date => "date",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        [
            FrontendInput::Text,
            FrontendInput::Textarea,
            FrontendInput::Select,
            FrontendInput::Multiselect,
            FrontendInput::Boolean,
            FrontendInput::Price,
            FrontendInput::Date,
        ]
        .into_iter()
        .find(|input| input.code() == code)
    }

    /// Storage type of values entered through this input.
    pub fn backend_type(self) -> &'static str {
        match self {
            FrontendInput::Text | FrontendInput::Multiselect => "varchar",
            FrontendInput::Textarea => "text",
            FrontendInput::Select | FrontendInput::Boolean => "int",
            FrontendInput::Price => "decimal",
            FrontendInput::Date => "datetime",
        }
    }

    /// Whether values are picked from the attribute's own option list.
    pub fn uses_options(self) -> bool {
        matches!(self, FrontendInput::Select | FrontendInput::Multiselect)
    }
}

/// Entity shell for a product attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeDraft {
    pub code: String,
    pub label: String,
    pub input: FrontendInput,
    pub backend_type: String,
    pub is_required: bool,
    pub is_searchable: bool,
    /// Per-store labels, by store view.
    pub store_labels: Vec<(StoreId, String)>,
    /// Option labels in sort order.
    pub options: Vec<String>,
}

/// A product attribute with its per-store labels and options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub model: entity::attribute::Model,
    pub labels: Vec<entity::attribute_label::Model>,
    /// Options ordered by `sort_order`.
    pub options: Vec<entity::attribute_option::Model>,
}

impl Attribute {
    /// Label seen in `store_id`; the frontend label unless overridden there.
    pub fn label_for(&self, store_id: StoreId) -> &str {
        if store_id != DEFAULT_STORE_ID {
            if let Some(label) = self.labels.iter().find(|l| l.store_id == store_id) {
                return &label.value;
            }
        }
        &self.model.frontend_label
    }

    pub fn option_labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    pub fn frontend_input(&self) -> Option<FrontendInput> {
        FrontendInput::from_code(&self.model.frontend_input)
    }
}

impl FixtureEntity for Attribute {
    type Id = i32;

    const KIND: &'static str = "attribute";

    fn id(&self) -> i32 {
        self.model.id
    }

    fn natural_key(&self) -> String {
        self.model.attribute_code.clone()
    }
}
