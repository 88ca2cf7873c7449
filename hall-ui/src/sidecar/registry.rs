use dioxus::prelude::*;
use hall_types::{SidecarPayload, SidecarType};

use crate::sidecar::plugins::{ChartView, CitationsView, DocView, JsonView, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginId {
    Citations,
    Doc,
    Chart,
    Table,
    JsonFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub id: PluginId,
    pub key: &'static str,
    pub label: &'static str,
}

/// Renderers in lookup order. The catch-all stays last.
pub const REGISTRY: [PluginInfo; 5] = [
    PluginInfo {
        id: PluginId::Citations,
        key: "citations",
        label: "Citations",
    },
    PluginInfo {
        id: PluginId::Doc,
        key: "doc",
        label: "Document",
    },
    PluginInfo {
        id: PluginId::Chart,
        key: "chart",
        label: "Chart",
    },
    PluginInfo {
        id: PluginId::Table,
        key: "table",
        label: "Table",
    },
    PluginInfo {
        id: PluginId::JsonFallback,
        key: "json-fallback",
        label: "Raw Data",
    },
];

/// Which renderer handles a payload type. New content types get an arm here
/// and an entry ahead of the fallback in [`REGISTRY`].
pub fn plugin_for(kind: SidecarType) -> PluginId {
    match kind {
        SidecarType::Citations => PluginId::Citations,
        SidecarType::Doc => PluginId::Doc,
        SidecarType::Chart => PluginId::Chart,
        SidecarType::Table => PluginId::Table,
        _ => PluginId::JsonFallback,
    }
}

impl PluginId {
    pub fn info(self) -> &'static PluginInfo {
        let index = match self {
            PluginId::Citations => 0,
            PluginId::Doc => 1,
            PluginId::Chart => 2,
            PluginId::Table => 3,
            PluginId::JsonFallback => 4,
        };
        &REGISTRY[index]
    }

    pub fn matches(self, kind: SidecarType) -> bool {
        self == PluginId::JsonFallback || plugin_for(kind) == self
    }
}

/// First registered plugin accepting the payload.
pub fn lookup(payload: &SidecarPayload) -> &'static PluginInfo {
    REGISTRY
        .iter()
        .find(|plugin| plugin.id.matches(payload.kind))
        .unwrap_or(&REGISTRY[REGISTRY.len() - 1])
}

#[component]
pub fn PluginView(payload: SidecarPayload) -> Element {
    match lookup(&payload).id {
        PluginId::Citations => rsx! { CitationsView { payload } },
        PluginId::Doc => rsx! { DocView { payload } },
        PluginId::Chart => rsx! { ChartView { payload } },
        PluginId::Table => rsx! { TableView { payload } },
        PluginId::JsonFallback => rsx! { JsonView { payload } },
    }
}
