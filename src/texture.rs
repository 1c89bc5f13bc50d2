/// Depth attachment format shared by every chapter pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Upload an RGBA8 pixel buffer as a sampled 2D texture.
pub fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    size: u32,
    pixels: &[u8],
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(size * 4),
            rows_per_image: Some(size),
        },
        wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

pub fn linear_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("chapter sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

// The Python original loaded container.jpg / awesomeface.png from disk.
// This repo ships no binary assets, so the texture chapters sample small
// generated patterns with the same roles instead.

/// Wooden-crate stand-in: warm checkerboard with darker seams.
pub fn container_pixels(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let cell = ((x / 8) + (y / 8)) % 2;
            let seam = x % 8 == 0 || y % 8 == 0;
            let (r, g, b) = if seam {
                (92, 58, 28)
            } else if cell == 0 {
                (178, 120, 64)
            } else {
                (146, 94, 48)
            };
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    pixels
}

/// Smiley stand-in: concentric yellow/black rings around the center.
pub fn rings_pixels(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    let center = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let ring = ((dx * dx + dy * dy).sqrt() / 6.0) as u32 % 2;
            let (r, g, b) = if ring == 0 { (240, 200, 40) } else { (30, 30, 30) };
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    pixels
}

/// Specular map for the lighting-maps chapter: bright steel border,
/// matte center, mirroring the classic container2_specular layout.
pub fn container_specular_pixels(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    let border = size / 8;
    for y in 0..size {
        for x in 0..size {
            let on_border =
                x < border || y < border || x >= size - border || y >= size - border;
            let v = if on_border { 220 } else { 20 };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_buffers_are_fully_sized_and_opaque() {
        for pixels in [
            container_pixels(64),
            rings_pixels(64),
            container_specular_pixels(64),
        ] {
            assert_eq!(pixels.len(), 64 * 64 * 4);
            assert!(pixels.chunks_exact(4).all(|p| p[3] == 255));
        }
    }

    #[test]
    fn specular_border_is_brighter_than_center() {
        let size = 64u32;
        let pixels = container_specular_pixels(size);
        let at = |x: u32, y: u32| pixels[((y * size + x) * 4) as usize];
        assert!(at(0, 0) > at(size / 2, size / 2));
    }
}
