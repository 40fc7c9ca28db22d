use std::fs;

use assert_cmd::Command;
use serde_json::Value;

fn datamint(drafts: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("datamint").unwrap();
    cmd.arg("--json").arg("--drafts").arg(drafts);
    cmd
}

fn stdout_json(out: &std::process::Output) -> Value {
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn timeouts_lists_every_label() {
    let dir = tempfile::tempdir().unwrap();
    let out = datamint(dir.path()).arg("timeouts").output().unwrap();
    assert!(out.status.success());
    let v = stdout_json(&out);
    let rows = v.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["label"], "Forever");
    assert_eq!(rows[0]["seconds"], 0);
    assert_eq!(rows[4]["seconds"], 31_556_600);
}

#[test]
fn nft_emits_token_uri() {
    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("art.svg");
    fs::write(&svg, "<svg width=\"10\"><rect/></svg>").unwrap();

    let out = datamint(dir.path()).arg("nft").arg("--svg").arg(&svg).output().unwrap();
    assert!(out.status.success());
    let v = stdout_json(&out);
    assert_eq!(v["createData"]["templateIndex"], 1);
    assert_eq!(v["createData"]["symbol"], "OCEAN-V4-NFT");
    assert!(v["createData"]["tokenURI"].as_str().unwrap().starts_with("eyJ"));
    assert!(v["options"]["image_data"]
        .as_str()
        .unwrap()
        .starts_with("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg'"));
}

#[test]
fn transform_reads_form_file() {
    let dir = tempfile::tempdir().unwrap();
    let form = dir.path().join("form.json");
    fs::write(
        &form,
        r#"{"publishType":"dataset","name":"Weather","author":"Jane","tags":"Climate Data, rain",
            "files":[{"url":"https://example.com/a.csv"}],"timeout":"1 day"}"#,
    )
    .unwrap();

    let out = datamint(dir.path()).arg("transform").arg("--form").arg(&form).output().unwrap();
    assert!(out.status.success());
    let v = stdout_json(&out);
    assert_eq!(v["serviceType"], "access");
    assert_eq!(v["metadata"]["main"]["type"], "dataset");
    assert_eq!(v["metadata"]["timeout"], 86_400);
    assert_eq!(v["metadata"]["additionalInformation"]["tags"][0], "climate-data");
}

#[test]
fn draft_show_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let out = datamint(dir.path())
        .args(["draft", "show", "--kind", "algorithm"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v = stdout_json(&out);
    assert_eq!(v["publishType"], "algorithm");
    assert_eq!(v["entrypoint"], "node $ALGO");
}

#[test]
fn rejected_custom_image_fails_and_keeps_draft() {
    let dir = tempfile::tempdir().unwrap();
    let form = dir.path().join("algo.json");
    fs::write(
        &form,
        r#"{"publishType":"algorithm","name":"Solver","dockerImage":"custom image",
            "image":"acme/solver","containerTag":"1.0","entrypoint":"python $ALGO",
            "files":[{"url":"https://example.com/solver.py"}]}"#,
    )
    .unwrap();

    let out = datamint(dir.path())
        .arg("publish")
        .arg("--form")
        .arg(&form)
        .args(["--account", "0x1"])
        .args(["--endpoint", "http://127.0.0.1:9/publish"])
        .args(["--docker-proxy", "http://127.0.0.1:9"])
        .arg("--skip-purgatory")
        .output()
        .unwrap();
    assert!(!out.status.success());

    let v = stdout_json(&out);
    assert_eq!(v["state"], "failed");
    assert_eq!(v["outcome"]["status"], "failure");
    assert_eq!(v["outcome"]["field"], "image");

    let draft = fs::read_to_string(dir.path().join("datamint-publish-form-algorithms.json")).unwrap();
    assert!(draft.contains("acme/solver"));
}

#[test]
fn dataset_draft_inherits_algorithm_datatoken() {
    let dir = tempfile::tempdir().unwrap();
    let form = dir.path().join("algo.json");
    fs::write(
        &form,
        r#"{"publishType":"algorithm","dataTokenOptions":{"name":"Foo Token","symbol":"FOO-1"}}"#,
    )
    .unwrap();

    let saved = datamint(dir.path()).args(["draft", "save"]).arg(&form).output().unwrap();
    assert!(saved.status.success());

    let out = datamint(dir.path())
        .args(["draft", "show", "--kind", "dataset"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v = stdout_json(&out);
    assert_eq!(v["dataTokenOptions"]["symbol"], "FOO-1");
}
