//! 渲染配置 - 全局 SSR 标记

use crate::error::RenderError;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::RwLock;

/// 开启 SSR 模式的环境变量
pub const SSR_ENV_VAR: &str = "NANO_SSR";

/// 渲染配置
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// 无可见文档模式（服务端渲染）
    #[serde(default, rename = "isSSR")]
    pub is_ssr: bool,
}

impl RenderConfig {
    pub fn ssr() -> Self {
        Self { is_ssr: true }
    }

    /// 从 JSON 文本加载
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从环境变量加载，`1` / `true` / `yes`（不区分大小写）视为开启
    pub fn from_env() -> Self {
        let is_ssr = std::env::var(SSR_ENV_VAR)
            .map(|v| flag_enabled(&v))
            .unwrap_or(false);
        Self { is_ssr }
    }
}

fn flag_enabled(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

static CONFIG: Lazy<RwLock<RenderConfig>> = Lazy::new(|| RwLock::new(RenderConfig::from_env()));

/// 替换全局配置
pub fn install(config: RenderConfig) {
    match CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// 当前全局配置的副本
pub fn current() -> RenderConfig {
    match CONFIG.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// 全局 SSR 标记
pub fn is_ssr() -> bool {
    current().is_ssr
}
