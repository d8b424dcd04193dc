/// OV3D Terminal Viewer - Orbiting camera over an OBJ mesh
///
/// Usage: ov3d-terminal [path/to/model.obj]
///
/// With no argument a built-in cube is shown. A missing or unreadable file
/// degrades to an empty scene (nothing drawn) instead of exiting.

use std::env;
use std::io;
use ov3d_core::{load_obj_or_empty, parse_obj, NormalPolicy};
use ov3d_terminal::TerminalApp;

const CUBE_OBJ: &str = include_str!("../assets/cube.obj");

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mesh = if args.len() < 2 {
        eprintln!("No OBJ file provided, using the built-in cube...");
        parse_obj(CUBE_OBJ, NormalPolicy::default())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
    } else {
        // Degrades to an empty mesh (with a diagnostic) if the file is
        // missing or malformed; the viewer then just draws nothing.
        load_obj_or_empty(&args[1], NormalPolicy::default())
    };

    println!(
        "Loaded {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );
    println!("Starting terminal viewer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(mesh)?;
    app.run()
}
