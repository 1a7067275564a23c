use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=wrapper.h");
    println!("cargo:rerun-if-changed=values.c");
    let out_dir = env::var("OUT_DIR").unwrap();

    // Headers must be read for the target, not the host.
    let compiler = cc::Build::new()
        .cargo_metadata(false)
        .get_compiler();

    let target_args: Vec<String> = compiler.args()
        .iter()
        .filter_map(|arg| arg.to_str())
        .filter(|arg| arg.starts_with("--target") || arg.starts_with("-m"))
        .map(String::from)
        .collect();

    // BLKGETSIZE64 expands through _IOR(), which only clang can evaluate.
    let bindings = bindgen::Builder::default()
        .clang_arg("-D_GNU_SOURCE")
        .clang_args(target_args)
        .clang_macro_fallback()
        .clang_macro_fallback_build_dir(&out_dir)
        .allowlist_var("__NR_epoll_create")
        .allowlist_var("__NR_io_uring_setup")
        .allowlist_var("__NR_io_uring_enter")
        .allowlist_var("__NR_io_uring_register")
        .allowlist_var("BLKGETSIZE64")
        .allowlist_recursively(false)
        .header("wrapper.h")
        .generate()
        .expect("Unable to generate bindings");

    let out_path = PathBuf::from(out_dir);
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");

    // Reference values from the C compiler, used to check the bindings.
    cc::Build::new()
        .file("values.c")
        .include(".")
        .define("_GNU_SOURCE", None)
        .compile("linux_uapi_values");
}
