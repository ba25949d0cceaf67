#[cfg(target_os = "windows")]
fn main() {
    let mut res = winres::WindowsResource::new();
    res.set_icon("assets/icon.ico")
        .set("InternalName", "GsaiAdmin.exe")
        .set_language(0x0409);
    if let Err(err) = res.compile() {
        eprintln!("winres error: {err}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
