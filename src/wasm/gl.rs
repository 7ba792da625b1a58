use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::backend::{Backend, Uniform};
use crate::error::SetupError;
use crate::shader::{ShaderStage, POSITION_ATTRIBUTE, QUAD_COMPONENTS, QUAD_VERTEX_COUNT, QUAD_VERTICES};

/// Linked Julia program with its quad uploaded and every uniform resolved.
pub struct WebGlBackend {
    gl: GL,
    width: WebGlUniformLocation,
    height: WebGlUniformLocation,
    mouse_pos: WebGlUniformLocation,
    palette_shift: WebGlUniformLocation,
}

impl WebGlBackend {
    /// Compile and link both stages, upload the quad and look up every slot.
    ///
    /// Any missing binding is fatal.
    pub fn new(gl: GL) -> Result<Self, SetupError> {
        let vertex = compile_shader(&gl, ShaderStage::Vertex)?;
        let fragment = compile_shader(&gl, ShaderStage::Fragment)?;
        let program = link_program(&gl, &vertex, &fragment)?;
        gl.use_program(Some(&program));

        upload_quad(&gl, &program)?;

        Ok(Self {
            width: uniform_location(&gl, &program, Uniform::Width)?,
            height: uniform_location(&gl, &program, Uniform::Height)?,
            mouse_pos: uniform_location(&gl, &program, Uniform::MousePos)?,
            palette_shift: uniform_location(&gl, &program, Uniform::PaletteShift)?,
            gl,
        })
    }

    fn location(&self, uniform: Uniform) -> &WebGlUniformLocation {
        match uniform {
            Uniform::Width => &self.width,
            Uniform::Height => &self.height,
            Uniform::MousePos => &self.mouse_pos,
            Uniform::PaletteShift => &self.palette_shift,
        }
    }
}

impl Backend for WebGlBackend {
    fn set_viewport(&mut self, width: u32, height: u32) {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        self.gl.viewport(0, 0, width, height);
    }

    fn set_float(&mut self, uniform: Uniform, value: f32) {
        self.gl.uniform1f(Some(self.location(uniform)), value);
    }

    fn set_vec2(&mut self, uniform: Uniform, value: [f32; 2]) {
        self.gl.uniform2f(Some(self.location(uniform)), value[0], value[1]);
    }

    fn draw_quad(&mut self) {
        self.gl.draw_arrays(GL::TRIANGLE_STRIP, 0, QUAD_VERTEX_COUNT);
    }
}

fn compile_shader(gl: &GL, stage: ShaderStage) -> Result<WebGlShader, SetupError> {
    let kind = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl.create_shader(kind).ok_or(SetupError::CreateFailed("shader"))?;
    gl.shader_source(&shader, stage.source());
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SetupError::ShaderCompile { stage, log })
    }
}

fn link_program(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, SetupError> {
    let program = gl.create_program().ok_or(SetupError::CreateFailed("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(SetupError::ProgramLink(log))
    }
}

fn upload_quad(gl: &GL, program: &WebGlProgram) -> Result<(), SetupError> {
    let vao = gl
        .create_vertex_array()
        .ok_or(SetupError::CreateFailed("vertex array"))?;
    gl.bind_vertex_array(Some(&vao));

    let buffer = gl.create_buffer().ok_or(SetupError::CreateFailed("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let data = js_sys::Float32Array::from(&QUAD_VERTICES[..]);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);

    let position = u32::try_from(gl.get_attrib_location(program, POSITION_ATTRIBUTE))
        .map_err(|_| SetupError::MissingAttribute(POSITION_ATTRIBUTE))?;
    gl.enable_vertex_attrib_array(position);
    // two 4-byte floats per vertex, tightly packed
    gl.vertex_attrib_pointer_with_i32(position, QUAD_COMPONENTS, GL::FLOAT, false, QUAD_COMPONENTS * 4, 0);
    Ok(())
}

fn uniform_location(gl: &GL, program: &WebGlProgram, uniform: Uniform) -> Result<WebGlUniformLocation, SetupError> {
    gl.get_uniform_location(program, uniform.name())
        .ok_or(SetupError::MissingUniform(uniform.name()))
}
