/// Stack growth for deeply nested source.
///
/// Parsing and evaluation both recurse once per nesting level of the input.
/// Wrapping the recursive entry points keeps pathological programs such as
/// thousands of nested parentheses from overflowing the native stack.
pub mod stack;
