//! イメージ参照の導出

use std::fmt;
use tideflow_nexus::ComponentDescriptor;

/// 完全修飾のイメージ参照（registry/name:tag）
///
/// コンポーネントの name + version とレジストリホストから
/// 決定論的に導出される。ソースとデスティネーションの参照は
/// レジストリホストだけが異なる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub registry: String,
    pub name: String,
    pub tag: String,
}

impl ImageReference {
    pub fn new(
        registry: impl Into<String>,
        name: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            registry: registry.into(),
            name: name.into(),
            tag: tag.into(),
        }
    }

    /// コンポーネントとレジストリホストから参照を導出する
    pub fn from_component(registry: &str, component: &ComponentDescriptor) -> Self {
        Self::new(registry, &component.name, &component.version)
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.registry, self.name, self.tag)
    }
}
