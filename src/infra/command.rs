use std::process::{ExitStatus, Stdio};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

/// Spawns a command and streams its combined stdout and stderr into `log`
/// as the output is produced.
///
/// The two pipes are read as line streams and merged into one, so the log
/// preserves the interleaving the child produced it in. Each line is
/// flushed immediately, which keeps a tail of the log reflecting progress
/// while a long-running child is still alive. Once both streams reach
/// end-of-file the call blocks on child completion.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
/// * `log` - The log file receiving the combined output.
///
/// # Returns
/// The `ExitStatus` of the process wrapped in an `io::Result`. Spawn
/// failures and log-write failures surface as the `Err` case.
///
/// 派生一个命令，并在输出产生时将其合并的 stdout 和 stderr 流式写入 `log`。
///
/// 两个管道作为行流读取并合并为一个，因此日志保留了子进程产生输出时的交错顺序。
/// 每一行都会立即刷新，这使得在长时间运行的子进程仍然存活时，
/// 日志的 tail 就能反映进度。当两个流都到达末尾后，调用阻塞等待子进程结束。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
/// * `log` - 接收合并输出的日志文件。
///
/// # Returns
/// 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// 派生失败和日志写入失败作为 `Err` 情况浮出。
pub async fn spawn_and_stream(
    mut cmd: tokio::process::Command,
    mut log: File,
) -> std::io::Result<ExitStatus> {
    // Configure the command to capture stdout and stderr.
    // 配置命令以捕获 stdout 和 stderr。
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture child stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture child stderr"))?;

    let stdout_lines = LinesStream::new(BufReader::new(stdout).lines());
    let stderr_lines = LinesStream::new(BufReader::new(stderr).lines());
    let mut merged = stdout_lines.merge(stderr_lines);

    // Append and flush line by line so the log is written incrementally,
    // not buffered until the child exits.
    // 逐行追加并刷新，使日志以增量方式写入，而不是缓冲到子进程退出。
    while let Some(line) = merged.next().await {
        let line = line?;
        log.write_all(line.as_bytes()).await?;
        log.write_all(b"\n").await?;
        log.flush().await?;
    }

    // Both streams are at end-of-file; wait for the child to exit.
    // 两个流都已到达末尾；等待子进程退出。
    child.wait().await
}
