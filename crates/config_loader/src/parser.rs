//! 配置解析模块
//!
//! 仅支持 JSON 格式；除 serde 的类型匹配外不做任何校验。

use contracts::{ContractError, Settings};

/// 解析 JSON 格式配置
pub fn parse_json(content: &str) -> Result<Settings, ContractError> {
    serde_json::from_str(content).map_err(|e| ContractError::ConfigParse {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}
