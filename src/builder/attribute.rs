use crate::{
    error::FixtureError,
    fixture::{
        build::{amend, EntityBuilder},
        defaults::{humanize, next_sequence, placeholder_options},
        scope::{Scoped, StoreId},
    },
    platform::{
        data::attribute::AttributeRepository,
        model::attribute::{Attribute, AttributeDraft, FrontendInput},
        Platform,
    },
};

/// Builder for product attributes.
///
/// Defaults:
/// - code: `tdd_attribute_<n>`
/// - label: the code humanized (`tdd_attribute` becomes `Tdd Attribute`)
/// - input `text`, with the backend type following the input
/// - not required, not searchable
/// - options: five placeholders `Option 1` to `Option 5` for select and multiselect
///   inputs, none otherwise. Options set through `with_options`, even an empty list,
///   are never replaced.
#[derive(Clone)]
pub struct AttributeBuilder<'a> {
    repository: AttributeRepository<'a>,
    code: Option<String>,
    label: Scoped<String>,
    input: Option<FrontendInput>,
    is_required: Option<bool>,
    is_searchable: Option<bool>,
    options: Option<Vec<String>>,
}

impl<'a> AttributeBuilder<'a> {
    pub fn new(repository: AttributeRepository<'a>) -> Self {
        Self {
            repository,
            code: None,
            label: Scoped::default(),
            input: None,
            is_required: None,
            is_searchable: None,
            options: None,
        }
    }

    pub fn with_code(&self, code: impl Into<String>) -> Self {
        let code = code.into();
        amend(self, |b| b.code = Some(code))
    }

    /// Sets the frontend label used in every store view without its own label.
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        let label = label.into();
        amend(self, |b| b.label.set_default(label))
    }

    pub fn with_label_for(&self, store_id: StoreId, label: impl Into<String>) -> Self {
        let label = label.into();
        amend(self, |b| b.label.set_for(store_id, label))
    }

    pub fn with_input(&self, input: FrontendInput) -> Self {
        amend(self, |b| b.input = Some(input))
    }

    pub fn with_is_required(&self, is_required: bool) -> Self {
        amend(self, |b| b.is_required = Some(is_required))
    }

    pub fn with_is_searchable(&self, is_searchable: bool) -> Self {
        amend(self, |b| b.is_searchable = Some(is_searchable))
    }

    pub fn with_options<I, S>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        amend(self, |b| b.options = Some(options))
    }
}

impl<'a> EntityBuilder for AttributeBuilder<'a> {
    type Repository = AttributeRepository<'a>;

    fn repository(&self) -> &AttributeRepository<'a> {
        &self.repository
    }

    fn realize(&self, draft: &mut AttributeDraft) {
        let code = self
            .code
            .clone()
            .unwrap_or_else(|| format!("tdd_attribute_{}", next_sequence()));
        let input = self.input.unwrap_or_default();

        draft.label = self
            .label
            .default_value()
            .cloned()
            .unwrap_or_else(|| humanize(&code));
        draft.code = code;
        draft.input = input;
        draft.backend_type = input.backend_type().to_string();
        draft.is_required = self.is_required.unwrap_or(false);
        draft.is_searchable = self.is_searchable.unwrap_or(false);
        draft.store_labels = self
            .label
            .overrides()
            .map(|(store_id, label)| (store_id, label.clone()))
            .collect();
        draft.options = match &self.options {
            Some(options) => options.clone(),
            None if input.uses_options() => placeholder_options(),
            None => Vec::new(),
        };
    }
}

/// Creates a text attribute with default values.
pub async fn create_attribute(platform: &Platform) -> Result<Attribute, FixtureError> {
    AttributeBuilder::new(platform.attributes()).build().await
}
