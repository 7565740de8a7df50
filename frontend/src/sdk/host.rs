use crate::error::SdkError;

/// The slice of the browser the loader touches: script tags, elements and timers.
pub trait ScriptHost {
    /// Whether a `<script>` matching `selector` is already in the document.
    fn has_script(&self, selector: &str) -> bool;

    /// Appends an async script tag to `<head>`. Exactly one of the two
    /// callbacks fires later.
    fn inject_script(
        &self,
        url: &str,
        on_load: Box<dyn FnOnce()>,
        on_error: Box<dyn FnOnce()>,
    ) -> Result<(), SdkError>;

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>);

    fn has_element(&self, id: &str) -> bool;
}

/// One third-party SDK as seen through its global namespace.
pub trait SdkBinding {
    fn name(&self) -> &'static str;

    fn script_url(&self) -> String;

    /// Selector that finds a tag already loading this SDK.
    fn script_selector(&self) -> String {
        format!("script[src=\"{}\"]", self.script_url())
    }

    /// The SDK's global object exists.
    fn is_present(&self) -> bool;

    fn is_initialized(&self) -> bool {
        true
    }

    fn initialize(&self) -> Result<(), SdkError> {
        Ok(())
    }

    /// Runs right before the script tag is injected.
    fn before_inject(&self) -> Result<(), SdkError> {
        Ok(())
    }
}
