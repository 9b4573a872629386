//! `cybershield login|signup|logout|whoami` - Demo dashboard session.

use anyhow::Result;
use colored::Colorize;
use cybershield::session::{FileStore, Session};
use cybershield::User;
use dialoguer::Password;

use super::Context;
use crate::cli::args::{LoginArgs, SignupArgs};
use crate::config::Config;
use crate::education::Explain;
use crate::output::OutputFormat;

fn open() -> Result<Session<FileStore>> {
    let store = FileStore::new(Config::session_path()?);
    Ok(Session::restore(store)?)
}

fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => Ok(Password::new().with_prompt("Password").interact()?),
    }
}

pub fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    if ctx.explain {
        Explain::login().print();
    }

    let password = password_or_prompt(args.password)?;
    let mut session = open()?;
    let user = session.login(&args.email, &password, args.remember)?;

    print_user(ctx, Some(user))?;
    if matches!(ctx.output_format, OutputFormat::Pretty) && !args.remember && ctx.show_tips {
        println!("{}", "Not remembered: pass --remember to stay signed in.".dimmed());
    }
    Ok(())
}

pub fn signup(ctx: &Context, args: SignupArgs) -> Result<()> {
    if ctx.explain {
        Explain::login().print();
    }

    let password = password_or_prompt(args.password)?;
    let mut session = open()?;
    let user = session.signup(&args.email, &password, &args.name)?;

    print_user(ctx, Some(user))
}

pub fn logout(ctx: &Context) -> Result<()> {
    let mut session = open()?;
    let was_signed_in = session.is_signed_in();
    session.logout()?;

    if matches!(ctx.output_format, OutputFormat::Pretty) {
        if was_signed_in {
            println!("{} Signed out.", "Success:".green().bold());
        } else {
            println!("Not signed in.");
        }
    }
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    let session = open()?;
    print_user(ctx, session.current())
}

fn print_user(ctx: &Context, user: Option<&User>) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&user)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&user)?),
        OutputFormat::Csv => crate::output::write_csv(user)?,
        OutputFormat::Pretty => match user {
            Some(user) => println!(
                "{} {} {}",
                "Signed in as".bold(),
                user.name.cyan(),
                format!("<{}>", user.email).dimmed()
            ),
            None => println!("Not signed in."),
        },
    }
    Ok(())
}
