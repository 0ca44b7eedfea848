fn main() {
    // ImageMagick 6 ships its wand API as the "MagickWand" pkg-config
    // package; ImageMagick 7 renamed it MagickWand-7 and changed several
    // signatures, so only the 6.x package is accepted here.
    let lib = pkg_config::Config::new()
        .atleast_version("6.7")
        .probe("MagickWand");

    match lib {
        Ok(_) => {}
        Err(e) => {
            println!(
                "cargo:warning=MagickWand not found via pkg-config: {e}. \
                 Install ImageMagick 6 development headers (libmagickwand-dev)."
            );
            // Fall back to plain -l flags so `cargo doc` and IDE builds
            // still make progress on systems without the .pc file.
            println!("cargo:rustc-link-lib=MagickWand");
            println!("cargo:rustc-link-lib=MagickCore");
        }
    }
}
