//! Page and anchor classification.
//!
//! Both classifiers walk a fixed, ordered rule table and return the label of
//! the first matching prefix. Rule order is load-bearing: the generic `bpy.`
//! rule must come after the more specific `bpy.ops.` / `bpy.types.` /
//! `bpy.app` rules, otherwise every operator and type anchor would collapse
//! into the generic bucket.

use serde::{Deserialize, Serialize};

/// Coarse topic category assigned to a page from its file name.
///
/// Variants are declared in lexical label order so the derived `Ord` (and
/// therefore `BTreeMap` key order in the manifest) matches the sorted order
/// of the serialized labels. Classification priority is carried by
/// [`PAGE_RULES`], not by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageClass {
    AppPage,
    BmeshPage,
    BpyPage,
    GpuPage,
    MathutilsPage,
    OpsPage,
    OtherPage,
    TypesPage,
}

impl PageClass {
    pub fn as_str(self) -> &'static str {
        match self {
            PageClass::AppPage => "app_page",
            PageClass::BmeshPage => "bmesh_page",
            PageClass::BpyPage => "bpy_page",
            PageClass::GpuPage => "gpu_page",
            PageClass::MathutilsPage => "mathutils_page",
            PageClass::OpsPage => "ops_page",
            PageClass::OtherPage => "other_page",
            PageClass::TypesPage => "types_page",
        }
    }
}

/// Topic bucket assigned to an anchor from its leading dotted prefix.
///
/// Same layout rule as [`PageClass`]: lexical declaration order, priority in
/// [`ANCHOR_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorGroup {
    App,
    Bmesh,
    Bpy,
    Gpu,
    Mathutils,
    Operators,
    Types,
}

impl AnchorGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorGroup::App => "app",
            AnchorGroup::Bmesh => "bmesh",
            AnchorGroup::Bpy => "bpy",
            AnchorGroup::Gpu => "gpu",
            AnchorGroup::Mathutils => "mathutils",
            AnchorGroup::Operators => "operators",
            AnchorGroup::Types => "types",
        }
    }
}

/// Ordered page classification rules, most specific first. `bpy.app` has no
/// trailing dot so that `bpy.app.html` itself classifies as an app page.
pub const PAGE_RULES: &[(&str, PageClass)] = &[
    ("bpy.ops.", PageClass::OpsPage),
    ("bpy.types.", PageClass::TypesPage),
    ("bpy.app", PageClass::AppPage),
    ("bpy.", PageClass::BpyPage),
    ("bmesh", PageClass::BmeshPage),
    ("mathutils", PageClass::MathutilsPage),
    ("gpu", PageClass::GpuPage),
];

/// Ordered anchor grouping rules, most specific first. Unlike [`PAGE_RULES`]
/// the `bpy.app.` rule keeps its trailing dot: the bare `bpy.app` anchor
/// belongs to the generic `bpy` bucket.
pub const ANCHOR_RULES: &[(&str, AnchorGroup)] = &[
    ("bpy.ops.", AnchorGroup::Operators),
    ("bpy.types.", AnchorGroup::Types),
    ("bpy.app.", AnchorGroup::App),
    ("bpy.", AnchorGroup::Bpy),
    ("bmesh.", AnchorGroup::Bmesh),
    ("mathutils.", AnchorGroup::Mathutils),
    ("gpu.", AnchorGroup::Gpu),
];

/// Classify a page by its file name. Total: files matching no rule are
/// `other_page`.
pub fn classify_page(file_name: &str) -> PageClass {
    PAGE_RULES
        .iter()
        .find(|(prefix, _)| file_name.starts_with(prefix))
        .map(|&(_, class)| class)
        .unwrap_or(PageClass::OtherPage)
}

/// Classify an anchor into its topic bucket. Partial: anchors matching no
/// rule are ungrouped and stay out of the manifest's grouped structures.
pub fn classify_anchor(anchor: &str) -> Option<AnchorGroup> {
    ANCHOR_RULES
        .iter()
        .find(|(prefix, _)| anchor.starts_with(prefix))
        .map(|&(_, group)| group)
}
