/// WGSL shader: one WVP uniform, one position attribute, color from position.
pub const MESH_SHADER: &str = r#"
struct Uniforms {
    wvp: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.wvp * vec4<f32>(position, 1.0);
    out.color = vec4<f32>(clamp(position, vec3<f32>(0.0), vec3<f32>(1.0)), 1.0);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_entry_points_and_uniform() {
        assert!(MESH_SHADER.contains("fn vs_main"));
        assert!(MESH_SHADER.contains("fn fs_main"));
        assert!(MESH_SHADER.contains("wvp: mat4x4<f32>"));
        assert!(MESH_SHADER.contains("@location(0) position: vec3<f32>"));
    }
}
