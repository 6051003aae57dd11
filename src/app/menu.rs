use crate::core::hire::HireDesk;
use crate::domain::ports::Clock;
use crate::utils::error::{HireError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Hire,
    Return,
    ShowRates,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = HireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::Hire),
            "2" => Ok(MenuChoice::Return),
            "3" => Ok(MenuChoice::ShowRates),
            "4" => Ok(MenuChoice::Exit),
            other => Err(HireError::InvalidMenuChoice {
                input: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    Exit,
}

/// 互動選單：一次讀一行、分派一個操作，直到選擇離開或輸入結束。
pub struct MenuSession<C: Clock> {
    desk: HireDesk<C>,
    currency: String,
}

impl<C: Clock> MenuSession<C> {
    pub fn new(desk: HireDesk<C>, currency: impl Into<String>) -> Self {
        Self {
            desk,
            currency: currency.into(),
        }
    }

    pub fn desk(&self) -> &HireDesk<C> {
        &self.desk
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        loop {
            print_menu(output)?;
            let Some(line) = read_line(&mut input)? else {
                tracing::debug!("Input closed, leaving menu");
                writeln!(output)?;
                writeln!(output, "Exiting...")?;
                return Ok(());
            };

            let outcome = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice, &mut input, output)?,
                Err(e) => {
                    report(output, &e)?;
                    MenuOutcome::Continue
                }
            };

            if outcome == MenuOutcome::Exit {
                return Ok(());
            }
        }
    }

    pub fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        input: &mut R,
        output: &mut W,
    ) -> Result<MenuOutcome> {
        tracing::debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::Hire => self.hire_flow(input, output),
            MenuChoice::Return => self.return_flow(input, output),
            MenuChoice::ShowRates => {
                self.show_rates(output)?;
                Ok(MenuOutcome::Continue)
            }
            MenuChoice::Exit => {
                writeln!(output, "Exiting...")?;
                Ok(MenuOutcome::Exit)
            }
        }
    }

    pub fn show_rates<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "Available bicycles and rates per hour:")?;
        for entry in self.desk.list_all() {
            writeln!(
                output,
                "Bicycle ID: {}, Rate: {:.2} {} per hour",
                entry.id, entry.price_per_hour, self.currency
            )?;
        }
        Ok(())
    }

    fn hire_flow<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<MenuOutcome> {
        self.show_rates(output)?;
        let Some(id) = prompt(input, output, "Enter bicycle ID to hire: ")? else {
            return Ok(MenuOutcome::Exit);
        };

        match self.desk.hire(&id) {
            Ok(_) => writeln!(output, "Bicycle {} hired successfully.", id)?,
            Err(e) if e.is_recoverable() => report(output, &e)?,
            Err(e) => return Err(e),
        }
        Ok(MenuOutcome::Continue)
    }

    fn return_flow<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<MenuOutcome> {
        let Some(id) = prompt(input, output, "Enter bicycle ID to return: ")? else {
            return Ok(MenuOutcome::Exit);
        };

        match self.desk.return_bicycle(&id) {
            Ok(receipt) => {
                writeln!(output, "Bicycle {} returned successfully.", receipt.id)?;
                writeln!(
                    output,
                    "Duration of hire: {} hours ({} minutes)",
                    receipt.duration_hours, receipt.billed_minutes
                )?;
                writeln!(output, "Cost of hire: {:.2} {}", receipt.cost, self.currency)?;
            }
            Err(e) if e.is_recoverable() => report(output, &e)?,
            Err(e) => return Err(e),
        }
        Ok(MenuOutcome::Continue)
    }
}

fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "1. Hire a bicycle")?;
    writeln!(output, "2. Return a bicycle")?;
    writeln!(output, "3. Show available bicycles and rates")?;
    writeln!(output, "4. Exit")?;
    write!(output, "Enter your choice: ")?;
    output.flush()?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    Ok(read_line(input)?.map(|line| line.trim().to_string()))
}

/// 讀一行，去掉行尾換行；輸入結束時回傳 `None`。
/// 非 UTF-8 的位元組以替代字元保留，交由選單或查詢當成一般輸入處理。
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn report<W: Write>(output: &mut W, error: &HireError) -> Result<()> {
    tracing::warn!("⚠️ {} ({:?})", error, error.category());
    writeln!(output, "{}", error.user_friendly_message())?;
    Ok(())
}
