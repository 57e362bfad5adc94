//! Static Lua vocabulary for completion
//!
//! The completion candidates are language keywords plus standard-library
//! identifiers (Lua 5.x, including common compatibility names). Dotted names
//! like `"string.format"` are plain labels to the matcher; the `.` carries no
//! structural meaning here.
//!
//! The raw table is literal data and may contain duplicates; [`lua_vocabulary`]
//! exposes a deduplicated snapshot built once at first use and shared
//! read-only for the process lifetime.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Lua keywords and built-in identifiers (raw table, in source order)
///
/// Grouped by origin. Entries may repeat across groups (e.g. compatibility
/// aliases); use [`lua_vocabulary`] for the deduplicated set.
pub const LUA_KEYWORDS: &[&str] = &[
    // Keywords (Lua 5.x)
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function",
    "goto", "if", "in", "local", "nil", "not", "or", "repeat", "return", "then",
    "true", "until", "while",
    // Standard globals
    "_G", "_VERSION",
    "assert", "collectgarbage", "dofile", "error", "getmetatable", "ipairs",
    "load", "loadfile", "loadstring", "next", "pairs", "pcall", "print",
    "rawequal", "rawget", "rawlen", "rawset", "require", "select",
    "setmetatable", "tonumber", "tostring", "type", "xpcall",
    // coroutine library
    "coroutine.create", "coroutine.resume", "coroutine.running",
    "coroutine.status", "coroutine.wrap", "coroutine.yield",
    // package library
    "package.config", "package.cpath", "package.path", "package.loaded",
    "package.loaders", "package.searchers", "package.searchpath",
    "package.preload", "package.loadlib",
    // string library
    "string.byte", "string.char", "string.dump", "string.find", "string.format",
    "string.gmatch", "string.gsub", "string.len", "string.lower", "string.match",
    "string.rep", "string.reverse", "string.sub", "string.upper",
    // table library
    "table.concat", "table.insert", "table.move", "table.pack", "table.remove",
    "table.sort", "table.unpack",
    "table.maxn",  // present in some versions/compat libs
    // math library
    "math.abs", "math.acos", "math.asin", "math.atan", "math.atan2", "math.ceil",
    "math.cos", "math.cosh", "math.deg", "math.exp", "math.floor", "math.fmod",
    "math.frexp", "math.huge", "math.ldexp", "math.log", "math.log10", "math.max",
    "math.min", "math.modf", "math.pi", "math.pow", "math.rad", "math.random",
    "math.randomseed", "math.sin", "math.sinh", "math.sqrt", "math.tan", "math.tanh",
    // io library
    "io.close", "io.flush", "io.input", "io.lines", "io.open", "io.output",
    "io.popen", "io.read", "io.tmpfile", "io.type", "io.write",
    // os library
    "os.clock", "os.date", "os.difftime", "os.execute", "os.exit", "os.getenv",
    "os.remove", "os.rename", "os.time", "os.tmpname",
    // debug library
    "debug.debug", "debug.gethook", "debug.getinfo", "debug.getlocal",
    "debug.getmetatable", "debug.getregistry", "debug.getupvalue",
    "debug.sethook", "debug.setlocal", "debug.setupvalue", "debug.traceback",
    // utf8 library
    "utf8.char", "utf8.charpattern", "utf8.codepoint", "utf8.codes",
    "utf8.len", "utf8.offset", "utf8.nfcnormalize", "utf8.normalize", "utf8.next",
    // additional/compat globals sometimes present
    "unpack", "module", "package.loaders", "loadlib", "bit32", "bit32.band",
    "bit32.bnot", "bit32.bor", "bit32.bxor", "bit32.lshift", "bit32.rshift",
    "bit32.arshift", "bit32.extract", "bit32.replace", "bit32.test",
    // common Lua-ecosystem helpers and deprecated/compat names
    "pairsByKeys", "table.foreach", "table.foreachi",
];

/// Deduplicated vocabulary snapshot, built once on first use.
///
/// First occurrence wins; source-table order is otherwise preserved so the
/// engine's stable sort has a deterministic fallback order.
static LUA_VOCABULARY: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut seen = HashSet::with_capacity(LUA_KEYWORDS.len());
    LUA_KEYWORDS
        .iter()
        .copied()
        .filter(|entry| seen.insert(*entry))
        .collect()
});

/// The deduplicated Lua vocabulary, shared read-only for the process lifetime.
pub fn lua_vocabulary() -> &'static [&'static str] {
    &LUA_VOCABULARY
}
