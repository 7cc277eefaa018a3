//! 標準環境変数解決実装（std::env を委譲）とテスト用の固定マップ

use crate::ports::outbound::EnvResolver;
use std::collections::HashMap;
use std::env;

/// プロセス環境変数を読む EnvResolver 実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|s| !s.is_empty())
    }
}

/// 与えたマップだけを環境として扱う EnvResolver 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MapEnvResolver {
    vars: HashMap<String, String>,
}

impl MapEnvResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvResolver for MapEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|s| !s.is_empty()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_resolver_treats_empty_as_unset() {
        let env = MapEnvResolver::new()
            .with("OPENAI_API_KEY", "")
            .with("PBO_MODEL", "gpt-4o-mini");
        assert_eq!(env.var("OPENAI_API_KEY"), None);
        assert_eq!(env.var("PBO_MODEL").as_deref(), Some("gpt-4o-mini"));
        assert_eq!(env.var("MISSING"), None);
    }
}
