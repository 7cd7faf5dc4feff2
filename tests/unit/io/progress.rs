//! Tests for per-stage progress tracking

#[cfg(test)]
mod tests {
    use photomosaic::io::progress::ProgressManager;

    // Tests stage bars track length and position
    // Verified by ignoring the stage total
    #[test]
    fn test_stage_tracks_counts() {
        let pm = ProgressManager::hidden();
        let bar = pm.start_stage("loading tiles", 3);

        assert_eq!(bar.length(), Some(3));
        bar.inc(2);
        assert_eq!(bar.position(), 2);
        assert_eq!(bar.prefix(), "loading tiles");
        pm.finish();
    }

    // Tests stage length can be set after creation
    // Verified by fixing length at creation
    #[test]
    fn test_stage_length_set_later() {
        let pm = ProgressManager::hidden();
        let bar = pm.start_stage("matching cells", 0);
        bar.set_length(10);
        bar.inc(10);

        assert_eq!(bar.position(), 10);
        assert_eq!(bar.length(), Some(10));
        bar.finish();
        assert!(bar.is_finished());
        pm.finish();
    }

    // Tests default trait implementation supports multiple stages
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();
        let first = pm.start_stage("a", 1);
        let second = pm.start_stage("b", 2);
        first.inc(1);
        second.inc(1);

        assert_eq!(first.position(), 1);
        assert_eq!(second.position(), 1);
        pm.finish();
    }
}
