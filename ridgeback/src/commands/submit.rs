use anyhow::{bail, Context};
use clap::Args;
use ridgeback_config::Config;
use ridgeback_core_contact_contracts::{
    ContactFormFeedback, ContactFormService, ContactFormSubmitError,
};
use ridgeback_models::contact::ContactField;

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Full name
    #[arg(long)]
    name: String,
    /// Email address
    #[arg(long)]
    email: String,
    /// Phone number, digits are formatted as 123-456-7890
    #[arg(long)]
    phone: Option<String>,
    /// The message
    #[arg(long)]
    message: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let form = Provider::new(&config)?.contact_form();

        match self.fill_and_submit(&form).await? {
            ContactFormFeedback::Success(message) => {
                println!("{message}");
                Ok(())
            }
            ContactFormFeedback::Error(message) => bail!(message),
        }
    }

    async fn fill_and_submit(
        self,
        form: &impl ContactFormService,
    ) -> anyhow::Result<ContactFormFeedback> {
        form.update_field(ContactField::Name, self.name);
        form.update_field(ContactField::Email, self.email);
        if let Some(phone) = self.phone {
            form.update_field(ContactField::Phone, phone);
        }
        form.update_field(ContactField::Message, self.message);

        if let Err(ContactFormSubmitError::Busy) = form.submit().await {
            bail!("A submission is already in flight");
        }

        form.state()
            .feedback()
            .context("The contact form did not report an outcome")
    }
}
