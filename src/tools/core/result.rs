/// Success/failure marker for tool outputs
pub trait ToolResult {
    /// Determine if the tool execution was successful
    fn is_success(&self) -> bool;
}
