/*!
# Statements
*/

#[path = "statements/assign.rs"]
#[allow(non_snake_case)]
pub mod ASSIGN;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/var.rs"]
#[allow(non_snake_case)]
pub mod VAR;
