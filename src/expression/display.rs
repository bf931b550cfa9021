use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut numbers = self.numbers.iter();
        if let Some(first) = numbers.next() {
            write!(f, "{}", first)?;
        }
        for (op, number) in self.operators.iter().zip(numbers) {
            write!(f, "{}{}", op, number)?;
        }
        Ok(())
    }
}
