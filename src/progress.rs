// src/progress.rs
/// Progress reporting for multi-request operations (loading a state's sites).
/// The terminal session implements this to print "Fetching" lines.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one item (a site detail page) has been fetched. `index` is 0-based.
    fn item_done(&mut self, _index: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
