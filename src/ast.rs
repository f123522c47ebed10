use std::fmt;

use serde::Serialize;

/// The root of a parsed program.
///
/// A program owns its statements in source order. It is built once by the
/// parser and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    /// Statements in the order they appear in the source.
    pub statements: Vec<Statement>,
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node")]
pub enum Statement {
    /// A bare declaration, `int x;`. The variable starts at 0.
    Declaration {
        /// The name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An assignment, `x = <expr>;`. Declarations with an initializer,
    /// `int x = <expr>;`, are also represented as assignments.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A print statement.
    Print {
        /// What to print.
        value: PrintArgument,
        /// Line number in the source code.
        line:  usize,
    },
}

/// The argument of a `print` statement.
///
/// String literals can only appear here; they are never part of an
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrintArgument {
    /// An integer expression, printed in decimal.
    Expression(Expr),
    /// A string literal, printed verbatim.
    Text(String),
}

/// An abstract syntax tree (AST) node representing an integer expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node")]
pub enum Expr {
    /// A non-negative integer literal.
    Number {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line the statement starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Declaration { line, .. } | Self::Assignment { line, .. } | Self::Print { line, .. } => {
                *line
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    /// Addition (`+`)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (`-`)
    #[serde(rename = "-")]
    Sub,
    /// Multiplication (`*`)
    #[serde(rename = "*")]
    Mul,
    /// Floor division (`/`)
    #[serde(rename = "/")]
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Discriminant of a [`Node`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeTag {
    Program,
    Declaration,
    Assignment,
    Print,
    BinaryOp,
    Number,
    Identifier,
    String,
}

/// A borrowed, uniform view of any node in the tree.
///
/// The AST is made of several types; `Node` lets consumers such as the graph
/// exporter walk all of them the same way through [`Node::tag`],
/// [`Node::children`] and [`Node::label`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    /// The root.
    Program(&'a Program),
    /// A statement.
    Statement(&'a Statement),
    /// An integer expression.
    Expr(&'a Expr),
    /// The string literal argument of a `print`.
    Text(&'a str),
}

impl<'a> Node<'a> {
    /// Returns which kind of node this is.
    #[must_use]
    pub const fn tag(&self) -> NodeTag {
        match self {
            Self::Program(_) => NodeTag::Program,
            Self::Statement(Statement::Declaration { .. }) => NodeTag::Declaration,
            Self::Statement(Statement::Assignment { .. }) => NodeTag::Assignment,
            Self::Statement(Statement::Print { .. }) => NodeTag::Print,
            Self::Expr(Expr::BinaryOp { .. }) => NodeTag::BinaryOp,
            Self::Expr(Expr::Number { .. }) => NodeTag::Number,
            Self::Expr(Expr::Identifier { .. }) => NodeTag::Identifier,
            Self::Text(_) => NodeTag::String,
        }
    }

    /// Returns the direct children of this node, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        match self {
            Self::Program(program) => program.statements.iter().map(Node::Statement).collect(),
            Self::Statement(Statement::Declaration { .. }) => Vec::new(),
            Self::Statement(Statement::Assignment { value, .. }) => vec![Node::Expr(value)],
            Self::Statement(Statement::Print { value, .. }) => match value {
                PrintArgument::Expression(expr) => vec![Node::Expr(expr)],
                PrintArgument::Text(text) => vec![Node::Text(text)],
            },
            Self::Expr(Expr::BinaryOp { left, right, .. }) => {
                vec![Node::Expr(left), Node::Expr(right)]
            },
            Self::Expr(Expr::Number { .. } | Expr::Identifier { .. }) | Self::Text(_) => Vec::new(),
        }
    }

    /// Returns the human-readable part of the node: the variable name,
    /// operator symbol or literal value. Nodes without one return their kind.
    ///
    /// # Example
    /// ```
    /// use scoobylang::ast::{BinaryOperator, Expr, Node};
    ///
    /// let sum = Expr::BinaryOp { left:  Box::new(Expr::Number { value: 1, line: 1 }),
    ///                            op:    BinaryOperator::Add,
    ///                            right: Box::new(Expr::Number { value: 2, line: 1 }),
    ///                            line:  1, };
    ///
    /// assert_eq!(Node::Expr(&sum).label(), "+");
    /// assert_eq!(Node::Expr(&sum).children()[1].label(), "2");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Program(_) => "Program".to_string(),
            Self::Statement(Statement::Declaration { name, .. } | Statement::Assignment { name, .. })
            | Self::Expr(Expr::Identifier { name, .. }) => name.clone(),
            Self::Statement(Statement::Print { .. }) => "Print".to_string(),
            Self::Expr(Expr::BinaryOp { op, .. }) => op.to_string(),
            Self::Expr(Expr::Number { value, .. }) => value.to_string(),
            Self::Text(text) => (*text).to_string(),
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program([")?;
        for (i, statement) in self.statements.iter().enumerate() {
            let separator = if i == 0 { "" } else { "," };
            write!(f, "{separator}\n    {statement}")?;
        }
        write!(f, "\n])")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration { name, .. } => write!(f, "Declaration('int', '{name}')"),
            Self::Assignment { name, value, .. } => write!(f, "Assignment('{name}', {value})"),
            Self::Print { value, .. } => write!(f, "Print({value})"),
        }
    }
}

impl fmt::Display for PrintArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{expr}"),
            Self::Text(text) => write!(f, "String('{text}')"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "Number({value})"),
            Self::Identifier { name, .. } => write!(f, "Identifier('{name}')"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "BinOp('{op}', {left}, {right})"),
        }
    }
}
