/// Unit tests for the mock device and mock libraries.

use super::*;

#[test]
fn test_mock_device_records_commands_in_order() {
    let mut device = MockGraphicsDevice::new();
    device.bind_screen().unwrap();
    device.set_depth_test(false).unwrap();
    device.set_viewport(Viewport::full(800, 600)).unwrap();
    device.clear(ClearFlags::COLOR | ClearFlags::DEPTH, [0.0; 4]).unwrap();

    assert_eq!(
        device.commands(),
        vec!["bind_screen", "depth_test off", "viewport 800x600", "clear color+depth"]
    );
}

#[test]
fn test_mock_device_creates_targets_with_unique_ids() {
    let mut device = MockGraphicsDevice::new();
    let a = device.create_target(TargetFormat::Rgba, 400, 300).unwrap();
    let b = device.create_target(TargetFormat::Rgb, 200, 150).unwrap();

    assert_eq!(a.width(), 400);
    assert_eq!(b.format(), TargetFormat::Rgb);
    assert_eq!(device.commands(), vec!["create_target RGBA 400x300", "create_target RGB 200x150"]);
}

#[test]
fn test_mock_device_failure_injection() {
    let mut device = MockGraphicsDevice::new();
    *device.fail_on.lock().unwrap() = Some("bind_screen".to_string());

    assert!(device.bind_screen().is_err());
    assert!(device.set_depth_test(true).is_ok());
    assert_eq!(device.commands(), vec!["depth_test on"]);
}

#[test]
fn test_mock_libraries_share_log() {
    let log = CommandLog::default();
    let mut geometry = MockGeometryLibrary::new(&["ship"], log.clone());
    let mut textures = MockTextureLibrary::new(&["hull"], log.clone());

    assert!(geometry.render_geometry("ship"));
    assert!(!geometry.render_geometry("rock"));
    assert!(textures.bind_texture(TextureChannel::Diffuse, "hull"));
    assert!(!textures.has_texture("missing"));

    assert_eq!(*log.lock().unwrap(), vec!["draw ship", "bind_texture 0 hull"]);
}

#[test]
fn test_mock_loader_tracks_paths() {
    let mut loader = MockAssetLoader::new(&["screenQuad"], &["envMap"], CommandLog::default());
    let geometry = loader.load_geometry_library("geometry.lib").unwrap();
    let textures = loader.load_texture_library("textures.lib").unwrap();

    assert!(geometry.has_geometry("screenQuad"));
    assert!(textures.has_texture("envMap"));
    assert_eq!(*loader.loaded_paths.lock().unwrap(), vec!["geometry.lib", "textures.lib"]);
}
