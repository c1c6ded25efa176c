use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// User-facing notification texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub out_of_stock: String,
    pub add_failed: String,
    pub remove_failed: String,
    pub update_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            out_of_stock: "Quantidade solicitada fora de estoque".to_string(),
            add_failed: "Erro na adição do produto".to_string(),
            remove_failed: "Erro na remoção do produto".to_string(),
            update_failed: "Erro na alteração de quantidade do produto".to_string(),
        }
    }
}

/// What to do when the stored cart cannot be decoded on open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptCartPolicy {
    #[default]
    Reset,
    Fail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSettings {
    pub storage_key: String,
    pub on_corrupt: CorruptCartPolicy,
    pub locale: Locale,
    pub messages: Messages,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            on_corrupt: CorruptCartPolicy::default(),
            locale: Locale::default(),
            messages: Messages::default(),
        }
    }
}
