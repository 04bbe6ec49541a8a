//! Declarative UI descriptions attached to tool responses.
//!
//! The host renders these; the service only describes them. Builders mirror
//! the host's UI vocabulary (cards, tables, data-entry forms, bar charts).

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiElement {
    Card(CardUi),
    Table(TableUi),
    Form(FormUi),
    Chart(ChartUi),
}

/// A titled text card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardUi {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub key: String,
    pub header: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableUi {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub widget: String,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormUi {
    pub title: String,
    pub description: String,
    pub render_mode: String,
    pub fields: Vec<FormField>,
    /// Tool to invoke with the submitted values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_submit: Option<FormSubmit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSubmit {
    pub tool: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartUi {
    pub chart_type: String,
    pub title: String,
    pub render_mode: String,
    pub chart_data: Vec<Value>,
    pub data_keys: ChartDataKeys,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataKeys {
    pub x: String,
    pub y: String,
}

/// Builder for [`CardUi`].
#[derive(Debug, Default)]
pub struct CardBuilder {
    title: String,
    content: String,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> UiElement {
        UiElement::Card(CardUi {
            title: self.title,
            content: self.content,
        })
    }
}

/// Builder for [`TableUi`].
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<TableColumn>,
    rows: Vec<Value>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(
        mut self,
        key: impl Into<String>,
        header: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        self.columns.push(TableColumn {
            key: key.into(),
            header: header.into(),
            column_type: column_type.into(),
        });
        self
    }

    pub fn rows(mut self, rows: Vec<Value>) -> Self {
        self.rows = rows;
        self
    }

    pub fn build(self) -> UiElement {
        UiElement::Table(TableUi {
            columns: self.columns,
            rows: self.rows,
        })
    }
}

/// Builder for [`FormUi`].
#[derive(Debug)]
pub struct FormBuilder {
    title: String,
    description: String,
    render_mode: String,
    fields: Vec<FormField>,
    on_submit: Option<FormSubmit>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            render_mode: "inline".to_string(),
            fields: Vec::new(),
            on_submit: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn render_mode(mut self, mode: impl Into<String>) -> Self {
        self.render_mode = mode.into();
        self
    }

    pub fn text_field(
        mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        required: bool,
    ) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            label: label.into(),
            field_type: "string".to_string(),
            widget: "text".to_string(),
            required,
        });
        self
    }

    pub fn on_submit(mut self, tool: impl Into<String>) -> Self {
        self.on_submit = Some(FormSubmit { tool: tool.into() });
        self
    }

    pub fn build(self) -> UiElement {
        UiElement::Form(FormUi {
            title: self.title,
            description: self.description,
            render_mode: self.render_mode,
            fields: self.fields,
            on_submit: self.on_submit,
        })
    }
}

/// Builder for [`ChartUi`].
#[derive(Debug)]
pub struct ChartBuilder {
    chart_type: String,
    title: String,
    render_mode: String,
    chart_data: Vec<Value>,
    data_keys: ChartDataKeys,
    description: String,
}

impl ChartBuilder {
    pub fn new(chart_type: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            title: String::new(),
            render_mode: "inline".to_string(),
            chart_data: Vec::new(),
            data_keys: ChartDataKeys {
                x: String::new(),
                y: String::new(),
            },
            description: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn render_mode(mut self, mode: impl Into<String>) -> Self {
        self.render_mode = mode.into();
        self
    }

    pub fn chart_data(mut self, data: Vec<Value>) -> Self {
        self.chart_data = data;
        self
    }

    pub fn data_keys(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.data_keys = ChartDataKeys {
            x: x.into(),
            y: y.into(),
        };
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn build(self) -> UiElement {
        UiElement::Chart(ChartUi {
            chart_type: self.chart_type,
            title: self.title,
            render_mode: self.render_mode,
            chart_data: self.chart_data,
            data_keys: self.data_keys,
            description: self.description,
        })
    }
}
