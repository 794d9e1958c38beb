//! Shader Source
//!
//! WGSL for the scene and overlay pipelines. Colors arrive as sRGB and are
//! converted to linear before output, since the surface format is sRGB.

/// Scene shader: per-instance model matrix and material, optional Lambert term.
pub const SCENE_SHADER: &str = r#"
struct SceneUniforms {
    view_proj: mat4x4<f32>,
    // xyz = direction the light travels, w = ambient
    light: vec4<f32>,
}

@group(0) @binding(0) var<uniform> scene: SceneUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec4<f32>,
}

struct InstanceInput {
    @location(3) model_0: vec4<f32>,
    @location(4) model_1: vec4<f32>,
    @location(5) model_2: vec4<f32>,
    @location(6) model_3: vec4<f32>,
    @location(7) color: vec4<f32>,
    @location(8) params: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) color: vec4<f32>,
    @location(2) lit: f32,
}

fn srgb_to_linear(c: vec3<f32>) -> vec3<f32> {
    return pow(c, vec3<f32>(2.2));
}

@vertex
fn vs_main(vert: VertexInput, inst: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(inst.model_0, inst.model_1, inst.model_2, inst.model_3);
    let world = model * vec4<f32>(vert.position, 1.0);

    var out: VertexOutput;
    out.clip_position = scene.view_proj * world;
    // Models are rigid (rotation + translation), so the upper 3x3 keeps normals unit length
    out.normal = (model * vec4<f32>(vert.normal, 0.0)).xyz;
    out.color = inst.color * vec4<f32>(1.0, 1.0, 1.0, vert.color.a);
    out.lit = inst.params.x;
    return out;
}

@fragment
fn fs_main(in: VertexOutput, @builtin(front_facing) front: bool) -> @location(0) vec4<f32> {
    let base = srgb_to_linear(in.color.rgb);
    if (in.lit < 0.5) {
        return vec4<f32>(base, in.color.a);
    }

    var n = normalize(in.normal);
    if (!front) {
        n = -n;
    }
    let ambient = scene.light.w;
    let diffuse = max(dot(n, -scene.light.xyz), 0.0);
    let shade = ambient + (1.0 - ambient) * diffuse;
    return vec4<f32>(base * shade, in.color.a);
}
"#;

/// Overlay shader: vertices are already in NDC.
pub const OVERLAY_SHADER: &str = r#"
struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(in.position.xy, 0.0, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(pow(in.color.rgb, vec3<f32>(2.2)), in.color.a);
}
"#;
