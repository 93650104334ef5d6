//! Grammar description
//!
//! The BNF productions recognized by the parser, kept as static data for
//! documentation and display. The parser does not consult this table; its
//! rule functions hardcode the same structure.

use std::fmt;

/// A grammar rule. Each variant has exactly one recognizer function on
/// [`Parser`](crate::parser::parse::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Program,
    Declaration,
    Assignment,
    ControlStructure,
    Print,
    Expression,
    ArithmeticExpression,
    Operator,
    StringLiteral,
    Characters,
    Character,
    Variable,
    Constant,
    Identifier,
    Integer,
}

impl Rule {
    /// Production name as written in the grammar.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Program => "programa",
            Rule::Declaration => "declaracion",
            Rule::Assignment => "asignacion",
            Rule::ControlStructure => "estructuraControl",
            Rule::Print => "impresion",
            Rule::Expression => "expresion",
            Rule::ArithmeticExpression => "expresionAritmetica",
            Rule::Operator => "operador",
            Rule::StringLiteral => "cadenaCaracteres",
            Rule::Characters => "caracteres",
            Rule::Character => "caracter",
            Rule::Variable => "variable",
            Rule::Constant => "constante",
            Rule::Identifier => "identificador",
            Rule::Integer => "entero",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One production: a rule and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    pub rule: Rule,
    pub rhs: &'static str,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> ::= {}", self.rule.name(), self.rhs)
    }
}

pub const PRODUCTIONS: [Production; 15] = [
    Production {
        rule: Rule::Program,
        rhs: "<declaracion>",
    },
    Production {
        rule: Rule::Declaration,
        rhs: "<asignacion> | <estructuraControl> | <impresion>",
    },
    Production {
        rule: Rule::Assignment,
        rhs: "<variable> \":=\" <expresion> \";\"",
    },
    Production {
        rule: Rule::ControlStructure,
        rhs: "\"if\" <expresion> \"{\" <declaracion> \"}\" \"else\" \"{\" <declaracion> \"}\"",
    },
    Production {
        rule: Rule::Print,
        rhs: "\"print\" <cadenaCaracteres> \";\"",
    },
    Production {
        rule: Rule::Expression,
        rhs: "<expresionAritmetica> | <constante> | <variable>",
    },
    Production {
        rule: Rule::ArithmeticExpression,
        rhs: "<expresion> <operador> <expresion>",
    },
    Production {
        rule: Rule::Operator,
        rhs: "\"+\" | \"-\" | \"*\" | \"/\" | \":=\" | \">=\" | \"<=\" | \">\" | \"<\" | \"=\" | \"<>\"",
    },
    Production {
        rule: Rule::StringLiteral,
        rhs: "\"\\\"\" <caracteres> \"\\\"\"",
    },
    Production {
        rule: Rule::Characters,
        rhs: "<caracter> <caracteres> | ε",
    },
    Production {
        rule: Rule::Character,
        rhs: "\"b\" | \"f\" | \"h\" | \"j\" | \"k\"",
    },
    Production {
        rule: Rule::Variable,
        rhs: "<identificador>",
    },
    Production {
        rule: Rule::Constant,
        rhs: "<entero>",
    },
    Production {
        rule: Rule::Identifier,
        rhs: "letter (letter | digit)*",
    },
    Production {
        rule: Rule::Integer,
        rhs: "[1-9][0-9]? | \"100\" | \"0\"",
    },
];

/// Look up the production for `rule`. [`PRODUCTIONS`] is in declaration
/// order of [`Rule`].
pub fn production(rule: Rule) -> &'static Production {
    &PRODUCTIONS[rule as usize]
}

/// All productions, one per line.
pub fn render_bnf() -> String {
    PRODUCTIONS
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_has_one_production() {
        for p in &PRODUCTIONS {
            let count = PRODUCTIONS.iter().filter(|q| q.rule == p.rule).count();
            assert_eq!(count, 1, "{}", p.rule);
            assert_eq!(production(p.rule), p);
        }
    }

    #[test]
    fn test_render_bnf() {
        let text = render_bnf();
        assert_eq!(text.lines().count(), PRODUCTIONS.len());
        assert!(text.starts_with("<programa> ::= <declaracion>\n"));
        assert!(text.contains("<impresion> ::= \"print\" <cadenaCaracteres> \";\""));
        assert!(text.ends_with("<entero> ::= [1-9][0-9]? | \"100\" | \"0\""));
    }
}
