/// The environment module holds the program's variable bindings.
///
/// There is exactly one flat scope per run. Blocks, branches and loop bodies
/// share it with the top level.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Runs `if`, `while` and `for` with a per-loop iteration ceiling.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with their line.
/// - Skips whitespace and `#` comments.
/// - Reports lexical errors for invalid or oversized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Desugars compound assignment into plain assignment.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, reals and booleans. The module also provides the
/// checked conversions the evaluator uses when an operator or statement needs
/// a particular kind.
pub mod value;
