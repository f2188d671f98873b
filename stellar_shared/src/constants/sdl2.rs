// names and paths used when generating the SDL2 dynapi function list

/// libTAS hook list, one `SDL_...(name)` per hooked function
pub const LIBTAS_HOOKS_HEADER: &str = "libTAS_sdlhooks.h";
/// SDL2 dynamic api table, `SDL_DYNAPI_PROC(ret,name,params,args,return)` lines
pub const DYNAPI_HEADER: &str = "sdl2_dynapi.h";
/// the name SDL itself ships the table under
pub const DYNAPI_PROCS_HEADER: &str = "SDL_dynapi_procs.h";

pub const SDL_PREFIX: &str = "SDL_";

// consumed by hyperwarp's sdl2_dynapi_helper
pub const DYNAPI_OUTPUT_PATH: &str = "src/utils/sdl2_dynapi.rs";
pub const DYNAPI_CONST_NAME: &str = "DYNAPI_FUNCS";
