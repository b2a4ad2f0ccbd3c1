use balance_blocks::{
    can_coefficient_be_moved,
    label::{block_label, term_label, LabelOptions},
    BlockId,
    EquationState,
    Side,
    Term,
};

/// Lists the blocks of one side with their handles, e.g. `[#0] 2  [#1] x  [#2] +3`. A
/// coefficient that cannot move on its own is listed together with its variable, as in
/// `[#0+#1] 2x`. The block in `marked` gets a `*` after its handle.
pub fn side_blocks(equation: &EquationState, side: Side, marked: Option<BlockId>) -> String {
    let mut items = Vec::new();
    let mark = |ids: &[BlockId]| if marked.map_or(false, |id| ids.contains(&id)) { "*" } else { "" };

    for (i, term) in equation.side(side).terms().iter().enumerate() {
        let first = LabelOptions { is_first: i == 0, ..Default::default() };
        match term {
            Term::Constant(block) | Term::Variable(block) => {
                items.push(format!("[{}{}] {}", block.id, mark(&[block.id]), block_label(block, first)));
            },
            Term::Scaled { coefficient, variable } if !can_coefficient_be_moved(coefficient, side, equation) => {
                let label = term_label(coefficient, variable);
                let sign = if i == 0 || label.starts_with('-') { "" } else { "+" };
                items.push(format!(
                    "[{}+{}{}] {}{}",
                    coefficient.id,
                    variable.id,
                    mark(&[coefficient.id, variable.id]),
                    sign,
                    label,
                ));
            },
            Term::Scaled { coefficient, variable } => {
                let after = LabelOptions { preceded_by_coefficient: true, ..Default::default() };
                items.push(format!("[{}{}] {}", coefficient.id, mark(&[coefficient.id]), block_label(coefficient, first)));
                items.push(format!("[{}{}] {}", variable.id, mark(&[variable.id]), block_label(variable, after)));
            },
        }
    }

    if items.is_empty() {
        "(empty)".to_string()
    } else {
        items.join("  ")
    }
}

/// The equation followed by the blocks of both sides.
pub fn board(equation: &EquationState, marked: Option<BlockId>) -> String {
    format!(
        "{}\n  left:  {}\n  right: {}",
        equation,
        side_blocks(equation, Side::Left, marked),
        side_blocks(equation, Side::Right, marked),
    )
}

#[cfg(test)]
mod tests {
    use balance_blocks::{EquationBuilder, Sign};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn stuck_coefficient_is_grouped() {
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 2.0);
        eq.x(Side::Left);
        let three = eq.constant(Side::Left, 3.0);
        eq.constant(Side::Right, 7.0);
        let eq = eq.build(2.0);

        assert_eq!(
            board(&eq, Some(three)),
            "2x + 3 = 7\n  left:  [#0+#1] 2x  [#2*] +3\n  right: [#3] 7",
        );
    }

    #[test]
    fn movable_coefficient_stands_alone() {
        let mut eq = EquationBuilder::new();
        let four = eq.constant(Side::Left, 4.0);
        eq.x(Side::Left);
        eq.constant(Side::Right, 8.0);
        let eq = eq.build(2.0);

        assert_eq!(side_blocks(&eq, Side::Left, Some(four)), "[#0*] 4  [#1] x");
    }

    #[test]
    fn grouped_terms_keep_their_sign() {
        // 5 - 3x = 2x + 1
        let mut eq = EquationBuilder::new();
        eq.constant(Side::Left, 5.0);
        eq.constant(Side::Left, -3.0);
        let x = eq.x(Side::Left);
        eq.constant(Side::Right, 2.0);
        eq.x(Side::Right);
        eq.constant(Side::Right, 1.0);
        let eq = eq.build(0.8);

        assert_eq!(side_blocks(&eq, Side::Left, Some(x)), "[#0] 5  [#1+#2*] -3x");
        assert_eq!(side_blocks(&eq, Side::Right, None), "[#3+#4] 2x  [#5] +1");
    }

    #[test]
    fn negative_blocks() {
        let mut eq = EquationBuilder::new();
        eq.variable(Side::Left, 1.0, Sign::Negative);
        eq.constant(Side::Left, -4.0);
        let eq = eq.build(0.0);

        assert_eq!(side_blocks(&eq, Side::Left, None), "[#0] -x  [#1] -4");
        assert_eq!(side_blocks(&eq, Side::Right, None), "(empty)");
    }
}
