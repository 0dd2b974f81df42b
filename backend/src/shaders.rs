use crate::error::{Error, Result};
use gl::types::*;
use gl::*;

const INFO_LOG_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => VERTEX_SHADER,
            ShaderStage::Fragment => FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// A compiled shader stage. The GL object is deleted on drop, which is safe
/// once every program using it has been linked.
#[derive(Debug)]
pub struct Shader {
    shader_id: u32,
    stage: ShaderStage,
}

impl Shader {
    pub fn compile(stage: ShaderStage, shader_code: &str) -> Result<Shader> {
        let shader_id = unsafe { gl::CreateShader(stage.gl_enum()) };
        if shader_id == 0 {
            return Err(Error::Gl(format!(
                "gl::CreateShader({}) failed",
                stage.name()
            )));
        }
        // owns the id from here so an early return deletes it
        let shader = Shader { shader_id, stage };

        let len: GLint = shader_code
            .len()
            .try_into()
            .map_err(|_| Error::Gl(format!("{} shader source too long", stage.name())))?;
        unsafe {
            gl::ShaderSource(
                shader.shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &len,
            );
            gl::CompileShader(shader.shader_id);
        }

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader.shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let log = read_info_log(|cap, len, buf| unsafe {
                gl::GetShaderInfoLog(shader.shader_id, cap, len, buf)
            });
            log::error!("{} shader compilation failed:\n{}", stage.name(), log);
            return Err(Error::Compile {
                stage: stage.name(),
                log,
            });
        }

        log::debug!("compiled {} shader {}", stage.name(), shader.shader_id);
        Ok(shader)
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.shader_id) };
    }
}

/// A linked shader program.
#[derive(Debug)]
pub struct Program {
    program_id: u32,
}

impl Program {
    pub fn from_sources(vertex_code: &str, fragment_code: &str) -> Result<Program> {
        let vertex = Shader::compile(ShaderStage::Vertex, vertex_code)?;
        let fragment = Shader::compile(ShaderStage::Fragment, fragment_code)?;
        // stages not needed anymore once linked, dropped on return
        Program::link(&[&vertex, &fragment])
    }

    /// Links the given stages. The shaders stay alive and may be linked into
    /// further programs.
    pub fn link(shaders: &[&Shader]) -> Result<Program> {
        let shader_program = unsafe { gl::CreateProgram() };
        if shader_program == 0 {
            return Err(Error::Gl("gl::CreateProgram() failed".to_string()));
        }
        let program = Program {
            program_id: shader_program,
        };

        for shader in shaders {
            unsafe { gl::AttachShader(program.program_id, shader.shader_id) };
        }
        unsafe { gl::LinkProgram(program.program_id) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(program.program_id, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let log = read_info_log(|cap, len, buf| unsafe {
                gl::GetProgramInfoLog(program.program_id, cap, len, buf)
            });
            log::error!("shader program link failed:\n{}", log);
            return Err(Error::Link(log));
        }

        for shader in shaders {
            unsafe { gl::DetachShader(program.program_id, shader.shader_id) };
        }

        log::debug!("linked program {}", program.program_id);
        Ok(program)
    }

    pub fn id(&self) -> u32 {
        self.program_id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program_id) };
    }
}

fn read_info_log(get: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar)) -> String {
    let mut v: Vec<u8> = vec![0; INFO_LOG_CAPACITY];
    let mut log_len = 0_i32;
    get(
        v.len() as GLsizei,
        &mut log_len as *mut GLsizei,
        v.as_mut_ptr() as *mut GLchar,
    );
    v.truncate(usize::try_from(log_len).unwrap_or(0).min(INFO_LOG_CAPACITY));
    String::from_utf8_lossy(&v).into_owned()
}
