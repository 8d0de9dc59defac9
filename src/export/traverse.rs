//! Recursive layer tree traversal.

use std::path::Path;

use crate::backend::Compositor;
use crate::config::OptionsConfig;
use crate::document::{Document, Node};
use crate::error::Result;
use crate::export::layer::export_layer;
use crate::export::state::ExportState;
use crate::fs::sanitize_name;
use crate::manifest::Manifest;

/// Everything a single document's traversal needs, threaded through the
/// recursive walk.
pub struct ExportContext<'a> {
    pub document_name: &'a str,
    pub output_dir: &'a Path,
    pub compositor: &'a dyn Compositor,
    pub options: &'a OptionsConfig,
}

/// Walk a document's layer tree depth-first, exporting every visible leaf
/// layer it contains.
pub fn traverse_document(
    document: &Document,
    ctx: &ExportContext<'_>,
    manifest: &mut Manifest,
    state: &mut ExportState,
) -> Result<()> {
    traverse_nodes(&document.children, Path::new(""), ctx, manifest, state)
}

/// Pre-order walk over one level of the tree.
///
/// Groups extend the accumulated parent path with their sanitized name and
/// are descended into regardless of their own visibility; leaves go to the
/// exporter. Recursion depth equals the document's nesting depth.
fn traverse_nodes(
    nodes: &[Node],
    parent_path: &Path,
    ctx: &ExportContext<'_>,
    manifest: &mut Manifest,
    state: &mut ExportState,
) -> Result<()> {
    for node in nodes {
        match node {
            Node::Group(group) => {
                let group_path = parent_path.join(sanitize_name(&group.name));
                traverse_nodes(&group.children, &group_path, ctx, manifest, state)?;
            }
            Node::Layer(layer) => {
                export_layer(layer, parent_path, ctx, manifest, state)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Group, LayerBounds, RasterLayer};
    use crate::error::Error;
    use image::RgbaImage;

    /// Compositor producing a solid 1x1 bitmap for every layer, except ids
    /// listed as empty or failing.
    struct FakeCompositor {
        empty_ids: Vec<usize>,
        failing_ids: Vec<usize>,
    }

    impl FakeCompositor {
        fn new() -> Self {
            Self {
                empty_ids: Vec::new(),
                failing_ids: Vec::new(),
            }
        }
    }

    impl Compositor for FakeCompositor {
        fn composite(&self, layer: &RasterLayer) -> Result<Option<RgbaImage>> {
            if self.failing_ids.contains(&layer.id) {
                return Err(Error::Composite {
                    layer: layer.name.clone(),
                    message: "simulated failure".into(),
                });
            }
            if self.empty_ids.contains(&layer.id) {
                return Ok(None);
            }
            Ok(Some(RgbaImage::new(1, 1)))
        }
    }

    fn leaf(id: usize, name: &str, visible: bool) -> Node {
        Node::Layer(RasterLayer {
            id,
            name: name.into(),
            visible,
            bounds: LayerBounds {
                left: 0,
                top: 0,
                width: 1,
                height: 1,
            },
            opacity: 255,
            blend_mode: "Normal".into(),
        })
    }

    fn group(name: &str, children: Vec<Node>) -> Node {
        Node::Group(Group {
            name: name.into(),
            visible: true,
            opacity: 255,
            children,
        })
    }

    fn document(children: Vec<Node>) -> Document {
        Document {
            name: "doc.psd".into(),
            width: 16,
            height: 16,
            children,
        }
    }

    fn run(
        doc: &Document,
        compositor: &FakeCompositor,
        output_dir: &Path,
    ) -> (Result<()>, Manifest, ExportState) {
        let options = OptionsConfig::default();
        let ctx = ExportContext {
            document_name: &doc.name,
            output_dir,
            compositor,
            options: &options,
        };
        let mut manifest = Manifest::new();
        let mut state = ExportState::new(doc.name.clone());
        let result = traverse_document(doc, &ctx, &mut manifest, &mut state);
        (result, manifest, state)
    }

    #[test]
    fn test_nested_groups_flatten_into_filename() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![group(
            "Head",
            vec![group("Face", vec![leaf(0, "Eye", true)])],
        )]);

        let (result, manifest, _) = run(&doc, &FakeCompositor::new(), tmp.path());

        result.unwrap();
        assert!(tmp.path().join("Head_Face_Eye.png").is_file());
        assert_eq!(manifest.get("doc.psd").unwrap()[0].path, "Head_Face_Eye.png");
    }

    #[test]
    fn test_top_level_leaf_has_no_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![leaf(0, "Background", true)]);

        let (result, manifest, _) = run(&doc, &FakeCompositor::new(), tmp.path());

        result.unwrap();
        assert!(tmp.path().join("Background.png").is_file());
        assert_eq!(manifest.get("doc.psd").unwrap()[0].path, "Background.png");
    }

    #[test]
    fn test_group_names_are_sanitized_in_path() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![group("He:ad", vec![leaf(0, "Eye?", true)])]);

        let (result, manifest, _) = run(&doc, &FakeCompositor::new(), tmp.path());

        result.unwrap();
        assert!(tmp.path().join("He_ad_Eye_.png").is_file());
        assert_eq!(manifest.get("doc.psd").unwrap()[0].name, "Eye?");
    }

    #[test]
    fn test_manifest_records_follow_traversal_order() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![
            leaf(0, "L1", true),
            group("G", vec![leaf(1, "L2", true)]),
            leaf(2, "L3", true),
        ]);

        let (result, manifest, state) = run(&doc, &FakeCompositor::new(), tmp.path());

        result.unwrap();
        let names: Vec<&str> = manifest
            .get("doc.psd")
            .unwrap()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["L1", "L2", "L3"]);
        assert_eq!(state.layers_exported, 3);
    }

    #[test]
    fn test_hidden_leaf_produces_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![leaf(0, "Ghost", false)]);

        let (result, manifest, state) = run(&doc, &FakeCompositor::new(), tmp.path());

        result.unwrap();
        assert!(manifest.is_empty());
        assert_eq!(state.layers_skipped_hidden, 1);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_hidden_group_is_still_descended() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![Node::Group(Group {
            name: "Hidden".into(),
            visible: false,
            opacity: 255,
            children: vec![leaf(0, "Inside", true)],
        })]);

        let (result, _, state) = run(&doc, &FakeCompositor::new(), tmp.path());

        result.unwrap();
        assert!(tmp.path().join("Hidden_Inside.png").is_file());
        assert_eq!(state.layers_exported, 1);
    }

    #[test]
    fn test_empty_layer_is_skipped_silently() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![leaf(0, "Empty", true), leaf(1, "Solid", true)]);
        let compositor = FakeCompositor {
            empty_ids: vec![0],
            failing_ids: Vec::new(),
        };

        let (result, manifest, state) = run(&doc, &compositor, tmp.path());

        result.unwrap();
        assert!(!tmp.path().join("Empty.png").exists());
        assert!(tmp.path().join("Solid.png").is_file());
        assert_eq!(manifest.get("doc.psd").unwrap().len(), 1);
        assert_eq!(state.layers_skipped_empty, 1);
    }

    #[test]
    fn test_composite_failure_aborts_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![
            leaf(0, "First", true),
            leaf(1, "Second", true),
            leaf(2, "Third", true),
        ]);
        let compositor = FakeCompositor {
            empty_ids: Vec::new(),
            failing_ids: vec![1],
        };

        let (result, manifest, state) = run(&doc, &compositor, tmp.path());

        assert!(result.is_err());
        // The first leaf was already written before the failure
        assert!(tmp.path().join("First.png").is_file());
        assert!(!tmp.path().join("Third.png").exists());
        assert_eq!(manifest.get("doc.psd").unwrap().len(), 1);
        assert_eq!(state.layers_exported, 1);
    }

    #[test]
    fn test_colliding_names_overwrite_and_append_both() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = document(vec![
            group("A", vec![leaf(0, "X", true)]),
            group("A", vec![leaf(1, "X", true)]),
        ]);

        let (result, manifest, _) = run(&doc, &FakeCompositor::new(), tmp.path());

        result.unwrap();
        assert!(tmp.path().join("A_X.png").is_file());
        // Both records land in the manifest even though the file was
        // overwritten
        assert_eq!(manifest.get("doc.psd").unwrap().len(), 2);
    }
}
