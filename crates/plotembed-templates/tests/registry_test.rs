//! Integration tests for the template registry against the bundled `_templates/`
//! directory and against scratch copies of it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use plotembed_templates::{
    bundled_base_dir, Context, RegistryConfig, RegistryError, TemplateName, TemplateRegistry,
};
use serde_json::json;
use tempfile::TempDir;

fn bundled_registry() -> TemplateRegistry {
    TemplateRegistry::from_base_dir(bundled_base_dir()).unwrap()
}

/// Copy the bundled templates into a fresh base directory.
fn copy_bundled() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("_templates");
    fs::create_dir_all(&dest).unwrap();
    for name in TemplateName::ALL {
        let src = bundled_base_dir().join("_templates").join(name.file_name());
        fs::copy(&src, dest.join(name.file_name())).unwrap();
    }
    dir
}

fn templates_dir(base: &Path) -> std::path::PathBuf {
    base.join("_templates")
}

#[test]
fn test_all_bundled_templates_load() {
    let registry = bundled_registry();
    let loaded: Vec<_> = registry.templates().map(|t| t.name()).collect();
    assert_eq!(loaded, TemplateName::ALL.to_vec());
}

#[test]
fn test_every_template_renders_with_empty_context() {
    let registry = bundled_registry();
    for name in TemplateName::ALL {
        let template = registry.template(name).unwrap();
        let out = template.render(&Context::new());
        assert!(out.is_ok(), "{name} failed: {:?}", out.err());
    }
}

#[test]
fn test_render_is_idempotent() {
    let registry = bundled_registry();
    let ctx = json!({
        "elementid": "a1b2",
        "js_urls": ["https://cdn.example.org/lib.min.js"],
        "css_files": ["https://cdn.example.org/lib.min.css"],
    });
    for name in TemplateName::ALL {
        let template = registry.template(name).unwrap();
        let first = template.render_json(&ctx).unwrap();
        let second = template.render_json(&ctx).unwrap();
        assert_eq!(first, second, "{name} not idempotent");
    }
}

#[test]
fn test_json_filter_emits_literal_quotes() {
    let registry = bundled_registry();
    let out = registry
        .template(TemplateName::AutoloadJs)
        .unwrap()
        .render_json(&json!({
            "elementid": "p1",
            "js_urls": ["a.js", "b.js"],
        }))
        .unwrap();

    assert!(out.contains(r#"var elementid = "p1";"#));
    assert!(out.contains(r#"var js_urls = ["a.js","b.js"];"#));
    assert!(!out.contains("&quot;"));
}

#[test]
fn test_autoescape_only_touches_html_templates() {
    let config = RegistryConfig::with_base_dir(bundled_base_dir()).autoescape(true);
    let registry = TemplateRegistry::load(&config).unwrap();
    let ctx = json!({ "elementid": "a\"b", "docs_json": {"a": 1} });

    let tag = registry
        .template(TemplateName::AutoloadTag)
        .unwrap()
        .render_json(&ctx)
        .unwrap();
    assert!(tag.contains(r#"id="a&quot;b""#));

    let doc = registry
        .template(TemplateName::DocJs)
        .unwrap()
        .render_json(&ctx)
        .unwrap();
    assert!(doc.contains(r#"var docs_json = {"a":1};"#));
}

#[test]
fn test_doc_js_with_app_path() {
    let registry = bundled_registry();
    let out = registry
        .template(TemplateName::DocJs)
        .unwrap()
        .render_json(&json!({
            "docs_json": {"d1": {"roots": []}},
            "render_items": [{"docid": "d1", "elementid": "e1"}],
            "app_path": "/app",
            "absolute_url": "http://localhost:5006/app",
        }))
        .unwrap();
    assert!(out.contains(r#"var render_items = [{"docid":"d1","elementid":"e1"}];"#));
    assert!(out.contains(
        r#"Bokeh.embed.embed_items(docs_json, render_items, "/app", "http://localhost:5006/app");"#
    ));
}

#[test]
fn test_doc_js_empty_context_defaults() {
    let registry = bundled_registry();
    let out = registry
        .render(TemplateName::DocJs, &Context::new())
        .unwrap();
    assert!(out.contains("var docs_json = {};"));
    assert!(out.contains("var render_items = [];"));
    assert!(out.contains("Bokeh.embed.embed_items(docs_json, render_items);"));
}

#[test]
fn test_js_resources_lists_files_and_raw() {
    let registry = bundled_registry();
    let out = registry
        .template(TemplateName::JsResources)
        .unwrap()
        .render_json(&json!({
            "js_files": ["one.js", "two.js"],
            "js_raw": ["console.log(1);"],
        }))
        .unwrap();
    assert!(out.contains(r#"<script type="text/javascript" src="one.js"></script>"#));
    assert!(out.contains(r#"<script type="text/javascript" src="two.js"></script>"#));
    assert!(out.contains("console.log(1);"));
}

#[test]
fn test_file_template_default_title() {
    let registry = bundled_registry();
    let file = registry.template(TemplateName::File).unwrap();

    let untitled = file.render(&Context::new()).unwrap();
    assert!(untitled.contains("<title>Bokeh Plot</title>"));

    let titled = file.render_json(&json!({"title": "Sales"})).unwrap();
    assert!(titled.contains("<title>Sales</title>"));
}

#[test]
fn test_autoload_tag_attributes() {
    let registry = bundled_registry();
    let out = registry
        .template(TemplateName::AutoloadTag)
        .unwrap()
        .render_json(&json!({
            "src_path": "/static/autoload.js",
            "elementid": "e9",
            "modelid": "m1",
        }))
        .unwrap();
    assert!(out.contains(r#"src="/static/autoload.js""#));
    assert!(out.contains(r#"data-bokeh-model-id="m1""#));
    assert!(!out.contains("data-bokeh-doc-id"));
}

#[test]
fn test_removing_any_template_fails_whole_registry() {
    for missing in TemplateName::ALL {
        let dir = copy_bundled();
        fs::remove_file(templates_dir(dir.path()).join(missing.file_name())).unwrap();

        let err = TemplateRegistry::from_base_dir(dir.path()).unwrap_err();
        match &err {
            RegistryError::TemplateNotFound { file, .. } => assert_eq!(*file, missing.file_name()),
            other => panic!("expected TemplateNotFound for {missing}, got {other:?}"),
        }
        assert!(err.to_string().contains(missing.file_name()));
    }
}

#[test]
fn test_renamed_template_fails() {
    let dir = copy_bundled();
    let tdir = templates_dir(dir.path());
    fs::rename(tdir.join("file.html"), tdir.join("file.htm")).unwrap();

    let err = TemplateRegistry::from_base_dir(dir.path()).unwrap_err();
    assert_eq!(err.file(), Some("file.html"));
}

#[test]
fn test_syntax_error_fails_whole_registry() {
    let dir = copy_bundled();
    fs::write(
        templates_dir(dir.path()).join("notebook_load.html"),
        "<span>{% for w in warnings %}{{ w }}</span>",
    )
    .unwrap();

    let err = TemplateRegistry::from_base_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::TemplateSyntax { file: "notebook_load.html", .. }
    ));
}

#[test]
fn test_missing_templates_dir() {
    let dir = tempfile::tempdir().unwrap();
    let err = TemplateRegistry::from_base_dir(dir.path()).unwrap_err();
    assert!(matches!(err, RegistryError::TemplateNotFound { .. }));
}

#[test]
fn test_custom_templates_subdir() {
    let dir = copy_bundled();
    fs::rename(templates_dir(dir.path()), dir.path().join("embed")).unwrap();

    let mut config = RegistryConfig::with_base_dir(dir.path());
    config.templates_subdir = "embed".to_string();
    let registry = TemplateRegistry::load(&config).unwrap();
    assert_eq!(registry.templates_dir(), dir.path().join("embed"));
}

#[test]
fn test_concurrent_renders_do_not_interfere() {
    let registry = Arc::new(bundled_registry());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let plot_div = registry.template(TemplateName::PlotDiv).unwrap();
                (0..50)
                    .map(|_| {
                        plot_div
                            .render_json(&json!({ "elementid": format!("plot-{i}") }))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        for out in handle.join().unwrap() {
            assert!(out.contains(&format!(r#"id="plot-{i}""#)));
            for j in (0..8).filter(|j| *j != i) {
                assert!(!out.contains(&format!("plot-{j}\"")));
            }
        }
    }
}

#[test]
fn test_minimal_plot_div_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let tdir = templates_dir(dir.path());
    fs::create_dir_all(&tdir).unwrap();
    fs::write(tdir.join("plot_div.html"), "<div>{{ name }}</div>").unwrap();

    let config = RegistryConfig::with_base_dir(dir.path()).only(&[TemplateName::PlotDiv]);
    let registry = TemplateRegistry::load(&config).unwrap();

    let out = registry
        .template(TemplateName::PlotDiv)
        .unwrap()
        .render_json(&json!({"name": "chart1"}))
        .unwrap();
    assert_eq!(out, "<div>chart1</div>");
}
