use nix::unistd::Pid;

const PID_MARKER: &str = "$$";

// Replaces the first `$$` in `text` with the decimal process id.
// Later occurrences are left alone.
pub fn expand_pid(text: &str, pid: Pid) -> String {
    text.replacen(PID_MARKER, &pid.to_string(), 1)
}
