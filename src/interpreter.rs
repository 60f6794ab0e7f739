/// The cursor module tracks the read position in the source text.
///
/// The parser reads characters through a small copyable cursor. Trying an
/// alternative production means copying the cursor, advancing the copy, and
/// writing it back only if the production matched.
///
/// # Responsibilities
/// - Exposes peek, advance and whitespace skipping over the source text.
/// - Tracks byte offset, line and column for error reporting.
/// - Hands the remaining input to the lexer for single-token scans.
pub mod cursor;
/// The evaluator module reduces AST nodes to runtime values.
///
/// The evaluator walks the tree produced by the parser, dispatching on each
/// node kind, applying operators and calling built-ins.
///
/// # Responsibilities
/// - Evaluates every expression kind the parser can produce.
/// - Implements truthiness, integer arithmetic and bitwise equality.
/// - Reports evaluation failures and runtime faults with their positions.
pub mod evaluator;
/// The lexer module recognizes integer literals and operator symbols.
///
/// The lexer is not run over the whole input. The parser asks it for one
/// token at the cursor position whenever it needs a number or an operator.
///
/// # Responsibilities
/// - Scans decimal, hexadecimal and binary integer literals.
/// - Detects literals that do not fit in 64 bits.
/// - Recognizes arithmetic, relational and punctuation symbols.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from source text.
///
/// A recursive-descent parser with backtracking: each production is tried on
/// a copy of the cursor and commits only when it matches.
///
/// # Responsibilities
/// - Parses literals, keywords, operators, conditionals, calls and functions.
/// - Allocates string literals on the heap while parsing.
/// - Reports the position at which parsing stopped.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are a tagged union of immediates (booleans, integers, floats, raw
/// pointers) and handles to heap objects (strings, arrays). The heap that owns
/// those objects lives here too.
///
/// # Responsibilities
/// - Defines the `Value` enum, its `Tag` and its display format.
/// - Defines the `Heap` arena and `ObjRef` handles.
/// - Implements identity-based equality for heap values.
pub mod value;
