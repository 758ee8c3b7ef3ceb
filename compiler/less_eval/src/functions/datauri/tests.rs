use super::*;
use crate::file_loader::MemoryFileLoader;
use pretty_assertions::assert_eq;

fn loader_with(files: &[(&str, &[u8])]) -> FileLoaderImpl {
    let memory = MemoryFileLoader::new();
    for (path, content) in files {
        memory.insert(*path, content.to_vec());
    }
    FileLoaderImpl::Memory(memory)
}

fn data_url(text: &str) -> Value {
    Value::url(Value::anonymous(text))
}

#[test]
fn explicit_base64_mime_type() {
    let loader = loader_with(&[("dot.gif", b"GIF89a")]);
    let out = datauri(
        &Value::quoted("image/gif;base64"),
        Some(&Value::quoted("dot.gif")),
        EvalMode::Compile,
        &loader,
    );
    assert_eq!(out, data_url("'data:image/gif;base64,R0lGODlh'"));
}

#[test]
fn explicit_plain_mime_type_percent_encodes() {
    let loader = loader_with(&[("a.svg", b"<svg a='1'/>")]);
    let out = datauri(
        &Value::quoted("image/svg+xml"),
        Some(&Value::quoted("a.svg")),
        EvalMode::Compile,
        &loader,
    );
    assert_eq!(
        out,
        data_url("'data:image/svg+xml,%3Csvg%20a%3D%271%27%2F%3E'")
    );
}

#[test]
fn single_argument_is_both_mime_type_and_path() {
    let loader = loader_with(&[("a b.png", b"x y"), ("dot;base64", b"GIF89a")]);
    assert_eq!(
        datauri(&Value::quoted("a b.png"), None, EvalMode::Compile, &loader),
        data_url("'data:a b.png,x%20y'")
    );
    assert_eq!(
        datauri(&Value::quoted("dot;base64"), None, EvalMode::Compile, &loader),
        data_url("'data:dot;base64,R0lGODlh'")
    );
}

#[test]
fn missing_file_falls_back_to_path() {
    let loader = loader_with(&[]);
    assert_eq!(
        datauri(
            &Value::quoted("image/png"),
            Some(&Value::quoted("gone.png")),
            EvalMode::Compile,
            &loader
        ),
        data_url("gone.png")
    );
    assert_eq!(
        datauri(&Value::quoted("gone.png"), None, EvalMode::Compile, &loader),
        data_url("gone.png")
    );
}

#[test]
fn empty_file_falls_back() {
    let loader = loader_with(&[("empty.png", b"")]);
    assert_eq!(
        datauri(&Value::quoted("empty.png"), None, EvalMode::Compile, &loader),
        data_url("empty.png")
    );
}

#[test]
fn sandboxed_mode_never_reads() {
    let loader = loader_with(&[("dot.png", b"\x89PNG")]);
    assert_eq!(
        datauri(&Value::quoted("dot.png"), None, EvalMode::Sandboxed, &loader),
        data_url("dot.png")
    );
}

#[test]
fn denied_loader_falls_back() {
    assert_eq!(
        datauri(
            &Value::quoted("dot.png"),
            None,
            EvalMode::Compile,
            &FileLoaderImpl::Denied
        ),
        data_url("dot.png")
    );
}
