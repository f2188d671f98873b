use std::{fs, path::Path};

use dynapi_gen::{
    emit::{EmitFormat, WriteOutcome},
    generator::{Generator, GeneratorConfig},
    header::HeaderFormat,
};

const SDLHOOKS: &str = "\
#ifndef LIBTAS_SDLHOOKS_H_INCL
#define LIBTAS_SDLHOOKS_H_INCL

SDL_HOOK(SDL_Init)
SDL_HOOK(SDL_GL_SwapWindow)
SDL_HOOK(SDL_PollEvent)
    SDL_HOOK(SDL_Init)
SDL_HOOK(SDL_GetTicks)

#endif
";

const DYNAPI: &str = "\
/* this file is generated */
SDL_DYNAPI_PROC(int,SDL_SetError,(SDL_PRINTF_FORMAT_STRING const char *a, ...),(a),return)
SDL_DYNAPI_PROC(int,SDL_Init,(Uint32 a),(a),return)
SDL_DYNAPI_PROC(void,SDL_Quit,(void),(),)
SDL_DYNAPI_PROC(int,SDL_Init,(Uint32 a),(a),return)
";

fn config_for(dir: &Path, header_name: &str, contents: &str) -> GeneratorConfig {
    let input = dir.join(header_name);
    fs::write(&input, contents).unwrap();
    GeneratorConfig {
        input,
        output: dir.join("src/utils/sdl2_dynapi.rs"),
        ..GeneratorConfig::default()
    }
}

#[test]
fn generates_hook_list() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "libTAS_sdlhooks.h", SDLHOOKS);
    let output = config.output.clone();

    let summary = Generator::new(config).run().unwrap();
    assert_eq!(summary.report.funcs.len(), 4);
    assert_eq!(summary.written, Some(WriteOutcome::Written));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "pub const DYNAPI_FUNCS: [&str; 4] = [\n  \"SDL_Init\",\n  \"SDL_GL_SwapWindow\",\n  \"SDL_PollEvent\",\n  \"SDL_GetTicks\",\n\n];"
    );
}

#[test]
fn dynapi_header_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "sdl2_dynapi.h", DYNAPI);
    let generator = Generator::new(config);
    assert_eq!(generator.matcher().format, HeaderFormat::Dynapi);

    let summary = generator.run().unwrap();
    let funcs: Vec<&str> = summary.report.funcs.iter().collect();
    assert_eq!(funcs, ["SDL_SetError", "SDL_Init", "SDL_Quit"]);
}

#[test]
fn second_run_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "libTAS_sdlhooks.h", SDLHOOKS);
    let output = config.output.clone();

    Generator::new(config.clone()).run().unwrap();
    let first = fs::read(&output).unwrap();
    let summary = Generator::new(config).run().unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(summary.written, Some(WriteOutcome::Unchanged));
    assert_eq!(first, second);
}

#[test]
fn check_mode_catches_stale_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "libTAS_sdlhooks.h", SDLHOOKS);
    let checking = GeneratorConfig { check: true, ..config.clone() };

    // nothing generated yet
    assert!(Generator::new(checking.clone()).run().is_err());
    assert!(!checking.output.exists());

    Generator::new(config.clone()).run().unwrap();
    let summary = Generator::new(checking.clone()).run().unwrap();
    assert_eq!(summary.written, None);

    fs::write(&config.input, format!("{}SDL_HOOK(SDL_Delay)\n", SDLHOOKS)).unwrap();
    assert!(Generator::new(checking).run().is_err());
}

#[test]
fn json_output_and_const_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path(), "libTAS_sdlhooks.h", SDLHOOKS);
    config.emit = EmitFormat::Json;
    config.output = dir.path().join("funcs.json");
    Generator::new(config.clone()).run().unwrap();
    let funcs: Vec<String> = serde_json::from_str(&fs::read_to_string(&config.output).unwrap()).unwrap();
    assert_eq!(funcs, ["SDL_Init", "SDL_GL_SwapWindow", "SDL_PollEvent", "SDL_GetTicks"]);

    config.emit = EmitFormat::Rust;
    config.const_name = "SDL_HOOKED".to_owned();
    config.output = dir.path().join("hooked.rs");
    Generator::new(config.clone()).run().unwrap();
    let written = fs::read_to_string(&config.output).unwrap();
    assert!(written.starts_with("pub const SDL_HOOKED: [&str; 4] = [\n"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        input: dir.path().join("nope.h"),
        output: dir.path().join("out.rs"),
        ..GeneratorConfig::default()
    };
    let err = Generator::new(config).run().unwrap_err();
    assert!(format!("{:#}", err).contains("nope.h"));
}

#[test]
fn padded_and_empty_names_are_kept_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "libTAS_sdlhooks.h", "SDL_HOOK(SDL_A)\nSDL_HOOK( SDL_A )\nSDL_HOOK()\n");
    let output = config.output.clone();

    let summary = Generator::new(config.clone()).run().unwrap();
    assert_eq!(summary.report.funcs.len(), 3);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "pub const DYNAPI_FUNCS: [&str; 3] = [\n  \"SDL_A\",\n  \" SDL_A \",\n  \"\",\n\n];"
    );

    let tidy = GeneratorConfig { tidy: true, ..config };
    let summary = Generator::new(tidy).run().unwrap();
    let funcs: Vec<&str> = summary.report.funcs.iter().collect();
    assert_eq!(funcs, ["SDL_A"]);
}

#[test]
fn table_plan_and_lookups() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        table_size: Some(2),
        lookup: vec!["SDL_PollEvent".to_owned(), "SDL_Nope".to_owned()],
        ..config_for(dir.path(), "libTAS_sdlhooks.h", SDLHOOKS)
    };

    let summary = Generator::new(config).run().unwrap();
    let table = summary.table.unwrap();
    // 4 names, slots 0..=2 are walked
    assert_eq!(table.patched.len(), 3);
    assert_eq!(table.patched[2], (2, "SDL_PollEvent".to_owned()));
    assert_eq!(table.skipped, 1);
    assert_eq!(
        summary.lookups,
        [("SDL_PollEvent".to_owned(), Some(2)), ("SDL_Nope".to_owned(), None)]
    );
}
