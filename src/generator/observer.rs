/// Progress hooks invoked by the generator.
///
/// For every artifact included in a run, `artifact_started` fires before any
/// I/O for that artifact and `artifact_finished` fires after it was written.
/// Pairs arrive in manifest order and never interleave. If a run fails, the
/// failing artifact gets a start without a finish.
#[cfg_attr(test, mockall::automock)]
pub trait GenerationObserver {
    fn artifact_started(&mut self, _path: &str) {}

    fn artifact_finished(&mut self, _path: &str) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

/// Adapts a pair of closures to [`GenerationObserver`]
pub struct CallbackObserver<S, F>
where
    S: FnMut(&str),
    F: FnMut(&str),
{
    on_start: S,
    on_finish: F,
}

impl<S, F> CallbackObserver<S, F>
where
    S: FnMut(&str),
    F: FnMut(&str),
{
    pub fn new(on_start: S, on_finish: F) -> Self {
        Self {
            on_start,
            on_finish,
        }
    }
}

impl<S, F> GenerationObserver for CallbackObserver<S, F>
where
    S: FnMut(&str),
    F: FnMut(&str),
{
    fn artifact_started(&mut self, path: &str) {
        (self.on_start)(path)
    }

    fn artifact_finished(&mut self, path: &str) {
        (self.on_finish)(path)
    }
}

/// Logs each artifact through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl GenerationObserver for LoggingObserver {
    fn artifact_started(&mut self, path: &str) {
        tracing::debug!("Writing {}", path);
    }

    fn artifact_finished(&mut self, path: &str) {
        tracing::info!("Created {}", path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_observer_forwards_paths() {
        let mut started = Vec::new();
        let mut finished = Vec::new();
        {
            let mut observer = CallbackObserver::new(
                |p: &str| started.push(p.to_string()),
                |p: &str| finished.push(p.to_string()),
            );
            observer.artifact_started("build.gradle");
            observer.artifact_finished("build.gradle");
        }

        assert_eq!(started, vec!["build.gradle"]);
        assert_eq!(finished, vec!["build.gradle"]);
    }
}
