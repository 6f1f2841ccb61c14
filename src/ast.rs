use std::rc::Rc;

/// An abstract syntax tree (AST) node.
///
/// `Node` covers every construct of the language, from literals and variables
/// to declarations, conditionals and function definitions. Each variant
/// carries the byte offset of the construct in the source for error reporting.
/// The tree is built once by the parser and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The root of a parsed source file.
    Program {
        /// Top-level statements, in source order.
        statements: Vec<Self>,
        /// Byte offset in the source.
        position:   usize,
    },
    /// A block delimited by `->` and `.`.
    Compound {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Byte offset in the source.
        position:   usize,
    },
    /// A variable declaration using `val`.
    VarDecl {
        /// The name of the variable.
        name:     String,
        /// The initial value of the variable.
        value:    Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// Assignment to an already declared variable.
    VarSet {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// Conditional with optional `elif` branches and `else` block.
    If {
        /// The primary condition expression.
        condition:  Box<Self>,
        /// Block evaluated if the condition is true.
        then_block: Box<Self>,
        /// `elif` branches, tried in order when the condition is false.
        elifs:      Vec<ElifBranch>,
        /// Block evaluated when no condition holds.
        else_block: Option<Box<Self>>,
        /// Byte offset in the source.
        position:   usize,
    },
    /// A user-defined function declaration.
    Function(Rc<FunctionDef>),
    /// Function call expression (e.g. `square(3)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Byte offset in the source.
        position:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A number literal.
    Number {
        /// The literal value.
        value:    f64,
        /// Byte offset in the source.
        position: usize,
    },
    /// A string literal.
    String {
        /// The literal contents, without quotes.
        value:    String,
        /// Byte offset in the source.
        position: usize,
    },
    /// `true` or `false`.
    Bool {
        /// The literal value.
        value:    bool,
        /// Byte offset in the source.
        position: usize,
    },
    /// `nil`.
    Nil {
        /// Byte offset in the source.
        position: usize,
    },
    /// A unary operation (e.g. negation).
    Unary {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// Array literal expression.
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Node {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use seta::ast::Node;
    ///
    /// let node = Node::Identifier { name:     "x".to_string(),
    ///                               position: 5, };
    ///
    /// assert_eq!(node.position(), 5);
    /// ```
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Function(def) => def.position,
            Self::Program { position, .. }
            | Self::Compound { position, .. }
            | Self::VarDecl { position, .. }
            | Self::VarSet { position, .. }
            | Self::If { position, .. }
            | Self::Call { position, .. }
            | Self::Identifier { position, .. }
            | Self::Number { position, .. }
            | Self::String { position, .. }
            | Self::Bool { position, .. }
            | Self::Nil { position }
            | Self::Unary { position, .. }
            | Self::Array { position, .. }
            | Self::Binary { position, .. } => *position,
        }
    }

    /// Short human-readable name of the node's variant.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Program { .. } => "program",
            Self::Compound { .. } => "block",
            Self::VarDecl { .. } => "declaration",
            Self::VarSet { .. } => "assignment",
            Self::If { .. } => "conditional",
            Self::Function(_) => "function definition",
            Self::Call { .. } => "call",
            Self::Identifier { .. } => "identifier",
            Self::Number { .. } => "number literal",
            Self::String { .. } => "string literal",
            Self::Bool { .. } => "boolean literal",
            Self::Nil { .. } => "nil literal",
            Self::Unary { .. } => "unary operation",
            Self::Array { .. } => "array literal",
            Self::Binary { .. } => "binary operation",
        }
    }
}

/// One `elif` branch of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct ElifBranch {
    /// The branch condition.
    pub condition: Node,
    /// The block evaluated when the condition holds.
    pub block:     Node,
}

/// Represents a user-defined function definition.
///
/// Runtime function values hold an `Rc` to this definition, so calling a
/// function walks the very body the parser produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:     String,
    /// The parameter names, in declaration order.
    pub params:   Vec<String>,
    /// Statements of the body block, evaluated when the function is called.
    pub body:     Vec<Node>,
    /// Byte offset in the source.
    pub position: usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Numeric identity (`+x`).
    Plus,
    /// Logical NOT (`!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Plus => "+",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
