use ridgeback_extern_contracts::contact::MockContactApiService;
use ridgeback_models::contact::ContactDraft;

use crate::ContactFormServiceImpl;

mod submit;

type Sut = ContactFormServiceImpl<MockContactApiService>;

fn make_sut(contact_api: MockContactApiService, draft: ContactDraft) -> Sut {
    let sut = ContactFormServiceImpl::new(contact_api);
    sut.lock().draft = draft;
    sut
}
