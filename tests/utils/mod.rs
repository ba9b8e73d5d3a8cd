#![allow(dead_code)]

/// The exact bytes the greeter writes to stdout.
pub const GREETING_STDOUT: &str = "Hello world!\n";

/// Run the `greeter` binary and check its stdout, stderr, and exit status.
pub fn test_greeter(
    args: &[&str],
    envs: &[(&str, &str)],
    stdout: &'static str,
    stderr: &'static str,
    code: Option<i32>,
) {
    use assert_cmd::Command;

    let mut command = Command::new(assert_cmd::cargo::cargo_bin!("greeter"));
    command.args(args);
    command.envs(envs.iter().copied());
    let assert = command.assert();
    let assert = assert.stdout(stdout).stderr(stderr);
    if let Some(code) = code {
        assert.code(code);
    } else {
        assert.success();
    }
}
