use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 单个模型描述
///
/// 只有 `id` 携带信息，其余三个字段固定为空值，仅为满足列表接口的结构。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDef {
    /// 模型标识，即 `[bot]` 的键
    pub id: String,
    /// 对象类型标签
    pub object: String,
    /// 创建时间戳
    pub created: i64,
    /// 归属方
    pub owned_by: String,
}

impl ModelDef {
    /// 以占位元数据创建模型描述
    #[must_use]
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: String::new(),
            created: 0,
            owned_by: String::new(),
        }
    }
}

/// 模型目录，序列化后即为 `{"object": "", "data": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    /// 列表对象类型标签
    pub object: String,
    /// 模型描述列表，顺序不固定
    pub data: Vec<ModelDef>,
}

impl ModelCatalog {
    /// 根据 bot 映射生成目录，每个键一条
    #[must_use]
    pub fn from_bots(bots: &HashMap<String, String>) -> Self {
        Self {
            object: String::new(),
            data: bots.keys().map(ModelDef::placeholder).collect(),
        }
    }

    /// 模型数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 目录是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 是否包含指定模型
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.data.iter().any(|model| model.id == id)
    }

    /// 遍历所有模型标识
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|model| model.id.as_str())
    }

    /// 序列化为列表接口的 JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_bots;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_match_bot_keys() {
        let bots = default_bots();
        let catalog = ModelCatalog::from_bots(&bots);

        assert_eq!(catalog.len(), bots.len());
        let ids: HashSet<&str> = catalog.ids().collect();
        let keys: HashSet<&str> = bots.keys().map(String::as_str).collect();
        assert_eq!(ids, keys);
    }

    #[test]
    fn test_placeholder_fields_are_empty() {
        let catalog = ModelCatalog::from_bots(&default_bots());

        assert_eq!(catalog.object, "");
        for model in &catalog.data {
            assert_eq!(model.object, "");
            assert_eq!(model.created, 0);
            assert_eq!(model.owned_by, "");
        }
    }

    #[test]
    fn test_empty_bots_give_empty_catalog() {
        let catalog = ModelCatalog::from_bots(&HashMap::new());
        assert!(catalog.is_empty());
        assert!(!catalog.contains("gpt-4"));
    }

    #[test]
    fn test_contains() {
        let bots = HashMap::from([("claude-3-haiku".to_string(), "Claude-3-Haiku".to_string())]);
        let catalog = ModelCatalog::from_bots(&bots);

        assert!(catalog.contains("claude-3-haiku"));
        assert!(!catalog.contains("Claude-3-Haiku"));
    }

    #[test]
    fn test_list_models_json_shape() {
        let bots = HashMap::from([("gpt-4".to_string(), "GPT-4".to_string())]);
        let value = serde_json::to_value(ModelCatalog::from_bots(&bots)).unwrap();

        assert_eq!(
            value,
            json!({
                "object": "",
                "data": [
                    { "id": "gpt-4", "object": "", "created": 0, "owned_by": "" }
                ]
            })
        );
    }

    #[test]
    fn test_to_json_is_parseable() {
        let catalog = ModelCatalog::from_bots(&default_bots());
        let parsed: ModelCatalog = serde_json::from_str(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(parsed, catalog);
    }
}
