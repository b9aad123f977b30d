//! Windows spawn path.
//!
//! `std::process::Command` cannot express a startup window state or a
//! console title, so process creation goes through `CreateProcessW` with
//! an explicit `STARTUPINFOW`: `CREATE_NEW_CONSOLE` for the separate
//! window, `SW_SHOWMINIMIZED` for its initial state, and `lpTitle` for the
//! fixed window label. Both child streams target the new console buffer,
//! which merges stderr into the visible output.

#![allow(unsafe_code)] // Win32 process creation is an FFI call.

use std::ffi::{OsStr, OsString, c_void};
use std::os::windows::ffi::OsStrExt;

use tracing::debug;
use windows::Win32::Foundation::{BOOL, CloseHandle};
use windows::Win32::System::Threading::{
    CREATE_NEW_CONSOLE, CREATE_UNICODE_ENVIRONMENT, CreateProcessW, PROCESS_INFORMATION,
    STARTF_USESHOWWINDOW, STARTUPINFOW,
};
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWMINIMIZED;
use windows::core::{PCWSTR, PWSTR};

use super::LaunchPlan;
use crate::error::LaunchError;

pub(super) fn spawn(plan: &LaunchPlan<'_>) -> Result<u32, LaunchError> {
    let mut command_line = command_line_wide(plan);
    let mut title = wide_null(OsStr::new(plan.title));
    let env_block = environment_block(plan);

    let startup = STARTUPINFOW {
        cb: u32::try_from(std::mem::size_of::<STARTUPINFOW>())
            .map_err(|e| LaunchError::Spawn(e.to_string()))?,
        dwFlags: STARTF_USESHOWWINDOW,
        wShowWindow: u16::try_from(SW_SHOWMINIMIZED.0)
            .map_err(|e| LaunchError::Spawn(e.to_string()))?,
        lpTitle: PWSTR(title.as_mut_ptr()),
        ..Default::default()
    };
    let mut process_info = PROCESS_INFORMATION::default();

    // SAFETY: every pointer handed to CreateProcessW stays alive for the
    // duration of the call, and the command-line buffer is mutable as the
    // API requires. No handles are inherited.
    let created = unsafe {
        CreateProcessW(
            PCWSTR::null(),
            PWSTR(command_line.as_mut_ptr()),
            None,
            None,
            BOOL::from(false),
            CREATE_NEW_CONSOLE | CREATE_UNICODE_ENVIRONMENT,
            Some(env_block.as_ptr().cast::<c_void>()),
            PCWSTR::null(),
            &startup,
            &mut process_info,
        )
    };
    created.map_err(|e| LaunchError::Spawn(e.to_string()))?;

    let pid = process_info.dwProcessId;

    // The launcher never waits on the game; release the handles right away.
    // SAFETY: both handles were just returned by CreateProcessW and are
    // closed exactly once.
    unsafe {
        let _ = CloseHandle(process_info.hProcess);
        let _ = CloseHandle(process_info.hThread);
    }

    debug!(pid, "game process started");
    Ok(pid)
}

/// Null-terminated UTF-16 copy of an `OsStr`.
fn wide_null(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(std::iter::once(0)).collect()
}

/// `"interpreter" "script"` as a mutable wide command line.
fn command_line_wide(plan: &LaunchPlan<'_>) -> Vec<u16> {
    let mut line = quote(plan.interpreter.as_os_str());
    line.push(" ");
    line.push(quote(plan.script.as_os_str()));
    wide_null(&line)
}

/// Wrap a path in quotes; the game script path contains a space.
fn quote(s: &OsStr) -> OsString {
    let mut out = OsString::from("\"");
    out.push(s);
    out.push("\"");
    out
}

/// Double-null-terminated UTF-16 environment block with the activation
/// variables applied.
fn environment_block(plan: &LaunchPlan<'_>) -> Vec<u16> {
    let mut vars: Vec<(OsString, OsString)> = std::env::vars_os()
        .filter(|(key, _)| {
            let replaced = key.eq_ignore_ascii_case("PATH")
                || key.eq_ignore_ascii_case("VIRTUAL_ENV");
            let removed = plan
                .env
                .removals
                .iter()
                .any(|name| key.eq_ignore_ascii_case(*name));
            !replaced && !removed
        })
        .collect();
    vars.push((OsString::from("PATH"), plan.env.path.clone()));
    vars.push((
        OsString::from("VIRTUAL_ENV"),
        plan.env.virtual_env.clone().into_os_string(),
    ));
    vars.sort_by(|a, b| a.0.cmp(&b.0));

    let mut block = Vec::new();
    for (key, value) in vars {
        block.extend(key.encode_wide());
        block.push(u16::from(b'='));
        block.extend(value.encode_wide());
        block.push(0);
    }
    block.push(0);
    block
}
