/// Tests for RenderPipeline

use super::*;

#[test]
fn test_passes_keep_declaration_order() {
    let mut pipeline = RenderPipeline::new();
    pipeline.push(RenderPass::new("shadow"));
    pipeline.push(RenderPass::new("main"));
    pipeline.push(RenderPass::new("combine"));

    assert_eq!(pipeline.pass_names(), vec!["shadow", "main", "combine"]);
    assert_eq!(pipeline.pass_count(), 3);
}

#[test]
fn test_pass_lookup_returns_first_match() {
    let pipeline: RenderPipeline = vec![
        RenderPass::new("blur").with_flag("blurX"),
        RenderPass::new("blur").with_flag("blurY"),
    ]
    .into_iter()
    .collect();

    assert_eq!(pipeline.pass("blur").unwrap().flags(), &["blurX".to_string()]);
    assert!(pipeline.pass("missing").is_none());
}

#[test]
fn test_clear() {
    let mut pipeline: RenderPipeline = std::iter::once(RenderPass::new("main")).collect();
    assert!(!pipeline.is_empty());
    pipeline.clear();
    assert!(pipeline.is_empty());
}
