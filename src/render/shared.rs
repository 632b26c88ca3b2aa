pub(crate) const SHADER: &str = r#"
struct GlobalUniform {
    view_proj: mat4x4<f32>,
    camera_position: vec4<f32>,
    light0_position: vec4<f32>,
    light0_radiance: vec4<f32>,
    light1_position: vec4<f32>,
    light1_radiance: vec4<f32>,
}

struct PropConstants {
    model: mat4x4<f32>,
    normal: mat3x4<f32>,
    color: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    // rgb: specular reflectance, a: shininess
    specular: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> globals: GlobalUniform;

@group(1) @binding(0)
var<uniform> object: PropConstants;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
}

struct FlatOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec3<f32>,
}

struct PhongOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
}

fn world_normal(normal: vec3<f32>) -> vec3<f32> {
    return mat3x3<f32>(
        object.normal[0].xyz,
        object.normal[1].xyz,
        object.normal[2].xyz
    ) * normal;
}

fn light_direction(light: vec4<f32>, world_pos: vec3<f32>) -> vec3<f32> {
    if (light.w == 0.0) {
        return normalize(light.xyz);
    }
    return normalize(light.xyz - world_pos);
}

fn reflectance(n: vec3<f32>, l: vec3<f32>, v: vec3<f32>) -> vec3<f32> {
    let facing = dot(n, l);
    if (facing <= 0.0) {
        return vec3<f32>(0.0);
    }
    let r = normalize(reflect(-l, n));
    let diffuse = object.diffuse.rgb * max(facing, 0.0);
    let specular = object.specular.rgb * pow(max(dot(r, v), 0.0), object.specular.a);
    return diffuse + specular;
}

fn shade(world_pos: vec3<f32>, normal: vec3<f32>) -> vec3<f32> {
    let n = normalize(normal);
    let v = normalize(globals.camera_position.xyz - world_pos);
    let c0 = globals.light0_radiance.rgb;
    let c1 = globals.light1_radiance.rgb;
    let l0 = light_direction(globals.light0_position, world_pos);
    let l1 = light_direction(globals.light1_position, world_pos);
    let ambient = (c0 + c1) * object.ambient.rgb;
    let lit = ambient + c0 * reflectance(n, l0, v) + c1 * reflectance(n, l1, v);
    return clamp(object.color.rgb * lit, vec3<f32>(0.0), vec3<f32>(1.0));
}

@vertex
fn vs_outline(input: VertexInput) -> FlatOutput {
    var out: FlatOutput;
    out.position = globals.view_proj * object.model * vec4<f32>(input.position, 1.0);
    out.color = object.color.rgb;
    return out;
}

@vertex
fn vs_gouraud(input: VertexInput) -> FlatOutput {
    var out: FlatOutput;
    let world_position = object.model * vec4<f32>(input.position, 1.0);
    out.position = globals.view_proj * world_position;
    out.color = shade(world_position.xyz, world_normal(input.normal));
    return out;
}

@fragment
fn fs_flat(input: FlatOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(input.color, 1.0);
}

@vertex
fn vs_phong(input: VertexInput) -> PhongOutput {
    var out: PhongOutput;
    let world_position = object.model * vec4<f32>(input.position, 1.0);
    out.position = globals.view_proj * world_position;
    out.world_pos = world_position.xyz;
    out.normal = world_normal(input.normal);
    return out;
}

@fragment
fn fs_phong(input: PhongOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(shade(input.world_pos, input.normal), 1.0);
}
"#;
