//! Single-layer export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::document::RasterLayer;
use crate::error::Result;
use crate::export::state::ExportState;
use crate::export::traverse::ExportContext;
use crate::fs::{flatten_path, layer_filename};
use crate::manifest::{ExportRecord, Manifest};

/// Export one leaf layer: composite it, write the PNG, append its record.
///
/// Hidden layers are fully excluded from output. A layer the compositor
/// returns no bitmap for leaves no trace either. Any failure is logged with
/// the layer's display name and re-raised, aborting the containing document.
pub fn export_layer(
    layer: &RasterLayer,
    parent_path: &Path,
    ctx: &ExportContext<'_>,
    manifest: &mut Manifest,
    state: &mut ExportState,
) -> Result<()> {
    if !layer.visible {
        state.increment_skipped_hidden();
        if ctx.options.show_skipped_layers {
            tracing::debug!("Skipping hidden layer: {}", layer.name);
        }
        return Ok(());
    }

    write_visible_layer(layer, parent_path, ctx, manifest, state).map_err(|e| {
        tracing::error!("Error exporting layer {}: {}", layer.name, e);
        e
    })
}

fn write_visible_layer(
    layer: &RasterLayer,
    parent_path: &Path,
    ctx: &ExportContext<'_>,
    manifest: &mut Manifest,
    state: &mut ExportState,
) -> Result<()> {
    let filename = layer_filename(&flatten_path(parent_path), &layer.name);

    let Some(image) = ctx.compositor.composite(layer)? else {
        // Nothing to rasterize: no file, no record
        state.increment_skipped_empty();
        if ctx.options.show_skipped_layers {
            tracing::debug!("Skipping empty layer: {}", layer.name);
        }
        return Ok(());
    };

    let output_path = ctx.output_dir.join(&filename);
    if ctx.options.show_exports {
        tracing::info!("Saving layer to: {}", output_path.display());
    }
    write_png(&image, &output_path)?;

    manifest.push(
        ctx.document_name,
        ExportRecord::for_layer(layer, ctx.document_name, &filename),
    );
    state.increment_exported();

    Ok(())
}

/// Write a bitmap to `path` as a PNG-encoded stream, replacing any existing
/// file of that name.
fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_png_produces_decodable_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.png");

        let mut image = RgbaImage::new(2, 3);
        image.put_pixel(1, 2, image::Rgba([10, 20, 30, 255]));
        write_png(&image, &path).unwrap();

        let read_back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read_back.dimensions(), (2, 3));
        assert_eq!(read_back.get_pixel(1, 2).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_write_png_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.png");

        write_png(&RgbaImage::new(4, 4), &path).unwrap();
        write_png(&RgbaImage::new(2, 2), &path).unwrap();

        let read_back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read_back.dimensions(), (2, 2));
    }
}
