//! COM automation backend (Windows only).
//!
//! Objects are driven through late-bound `IDispatch` calls, the same path a
//! scripting client would take. `ComHost` owns the thread's COM apartment and
//! must outlive every `ComObject` it hands out.
use std::mem::ManuallyDrop;
use std::ptr;

use tracing::debug;
use windows::Win32::System::Com::{
    CLSCTX_LOCAL_SERVER, CLSIDFromProgID, COINIT_APARTMENTTHREADED, CoCreateInstance,
    CoInitializeEx, CoUninitialize, DISPATCH_FLAGS, DISPATCH_METHOD, DISPATCH_PROPERTYGET,
    DISPATCH_PROPERTYPUT, DISPPARAMS, EXCEPINFO, IDispatch,
};
use windows::Win32::System::Variant::{VAR_CHANGE_FLAGS, VT_UNKNOWN, VariantChangeType};
use windows::core::{BSTR, GUID, HSTRING, IUnknown, Interface, PCWSTR, VARIANT};

use super::automation::{AutomationHost, Dispatch, HostError, Variant};

const LOCALE_USER_DEFAULT: u32 = 0x0400;
const DISPID_PROPERTYPUT: i32 = -3;

// VARENUM tags read straight off the VARIANT header.
const VT_EMPTY: u16 = 0;
const VT_NULL: u16 = 1;
const VT_I2: u16 = 2;
const VT_I4: u16 = 3;
const VT_R4: u16 = 4;
const VT_R8: u16 = 5;
const VT_BSTR: u16 = 8;
const VT_DISPATCH: u16 = 9;
const VT_BOOL: u16 = 11;
const VT_UNKNOWN_TAG: u16 = 13;
const VT_I1: u16 = 16;
const VT_UI1: u16 = 17;
const VT_UI2: u16 = 18;
const VT_INT: u16 = 22;

/// Connection to COM automation servers on the current thread.
pub struct ComHost {
    _apartment: Apartment,
}

impl ComHost {
    pub fn new() -> Result<Self, HostError> {
        Ok(Self {
            _apartment: Apartment::enter()?,
        })
    }
}

impl AutomationHost for ComHost {
    type Object = ComObject;

    fn connect(&self, prog_id: &str) -> Result<ComObject, HostError> {
        let connect_err = |e: windows::core::Error| HostError::Connect {
            prog_id: prog_id.to_string(),
            message: e.message().to_string(),
        };
        let name = HSTRING::from(prog_id);
        let clsid = unsafe { CLSIDFromProgID(&name) }.map_err(connect_err)?;
        let dispatch: IDispatch =
            unsafe { CoCreateInstance(&clsid, None, CLSCTX_LOCAL_SERVER) }.map_err(connect_err)?;
        debug!("Connected to {}", prog_id);
        Ok(ComObject(dispatch))
    }
}

struct Apartment;

impl Apartment {
    fn enter() -> Result<Self, HostError> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|e| HostError::invoke("CoInitializeEx", e.message()))?;
        Ok(Apartment)
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

/// Owned `IDispatch` reference; released when dropped.
pub struct ComObject(IDispatch);

impl ComObject {
    fn dispid(&self, name: &str) -> Result<i32, HostError> {
        let wide = HSTRING::from(name);
        let names = [PCWSTR(wide.as_ptr())];
        let mut dispid = 0i32;
        unsafe {
            self.0.GetIDsOfNames(
                &GUID::zeroed(),
                names.as_ptr(),
                1,
                LOCALE_USER_DEFAULT,
                &mut dispid,
            )
        }
        .map_err(|e| HostError::invoke(name, e.message()))?;
        Ok(dispid)
    }

    fn invoke(
        &self,
        name: &str,
        flags: DISPATCH_FLAGS,
        args: Vec<Variant<ComObject>>,
    ) -> Result<Variant<ComObject>, HostError> {
        let dispid = self.dispid(name)?;

        // DISPPARAMS takes arguments right to left.
        let mut raw = args
            .into_iter()
            .rev()
            .map(|arg| to_variant(name, arg))
            .collect::<Result<Vec<VARIANT>, HostError>>()?;
        let mut named = DISPID_PROPERTYPUT;
        let params = DISPPARAMS {
            rgvarg: if raw.is_empty() { ptr::null_mut() } else { raw.as_mut_ptr() },
            rgdispidNamedArgs: if flags == DISPATCH_PROPERTYPUT {
                &mut named
            } else {
                ptr::null_mut()
            },
            cArgs: raw.len() as u32,
            cNamedArgs: u32::from(flags == DISPATCH_PROPERTYPUT),
        };

        let mut result = VARIANT::new();
        let mut exception = EXCEPINFO::default();
        let outcome = unsafe {
            self.0.Invoke(
                dispid,
                &GUID::zeroed(),
                LOCALE_USER_DEFAULT,
                flags,
                &params,
                Some(&mut result),
                Some(&mut exception),
                None,
            )
        };
        let description = take_description(&mut exception, outcome.is_err());
        if let Err(e) = outcome {
            let message = if description.is_empty() {
                e.message().to_string()
            } else {
                description
            };
            return Err(HostError::Invoke {
                member: name.to_string(),
                message,
            });
        }
        from_variant(name, &result)
    }
}

/// Pull the error description out of `exception` and free its strings.
/// Servers may defer filling the details until `pfnDeferredFillIn` is called.
fn take_description(exception: &mut EXCEPINFO, failed: bool) -> String {
    if failed && exception.bstrDescription.is_empty() {
        if let Some(fill_in) = exception.pfnDeferredFillIn {
            if let Err(e) = unsafe { fill_in(exception) }.ok() {
                debug!("Deferred exception fill-in failed: {}", e);
            }
        }
    }
    let description = exception.bstrDescription.to_string();
    unsafe {
        ManuallyDrop::drop(&mut exception.bstrSource);
        ManuallyDrop::drop(&mut exception.bstrDescription);
        ManuallyDrop::drop(&mut exception.bstrHelpFile);
    }
    description
}

impl Dispatch for ComObject {
    fn get(&self, name: &str) -> Result<Variant<Self>, HostError> {
        self.invoke(name, DISPATCH_PROPERTYGET, Vec::new())
    }

    fn put(&self, name: &str, value: Variant<Self>) -> Result<(), HostError> {
        self.invoke(name, DISPATCH_PROPERTYPUT, vec![value]).map(|_| ())
    }

    fn call(&self, name: &str, args: Vec<Variant<Self>>) -> Result<Variant<Self>, HostError> {
        self.invoke(name, DISPATCH_METHOD, args)
    }
}

fn to_variant(member: &str, value: Variant<ComObject>) -> Result<VARIANT, HostError> {
    Ok(match value {
        Variant::Empty => VARIANT::new(),
        Variant::Bool(v) => VARIANT::from(v),
        Variant::Int(v) => VARIANT::from(v),
        Variant::Float(v) => VARIANT::from(v),
        Variant::Text(v) => VARIANT::from(BSTR::from(v.as_str())),
        Variant::Object(o) => {
            let unknown: IUnknown = o.0.cast().map_err(|e| HostError::invoke(member, e.message()))?;
            VARIANT::from(unknown)
        }
    })
}

fn from_variant(member: &str, value: &VARIANT) -> Result<Variant<ComObject>, HostError> {
    let convert = |e: windows::core::Error| HostError::invoke(member, e.message());
    let vt = unsafe { value.as_raw().Anonymous.Anonymous.vt };
    Ok(match vt {
        VT_EMPTY | VT_NULL => Variant::Empty,
        VT_BOOL => Variant::Bool(bool::try_from(value).map_err(convert)?),
        VT_I1 | VT_UI1 | VT_I2 | VT_UI2 | VT_I4 | VT_INT => {
            Variant::Int(i32::try_from(value).map_err(convert)?)
        }
        VT_R4 | VT_R8 => Variant::Float(f64::try_from(value).map_err(convert)?),
        VT_BSTR => Variant::Text(BSTR::try_from(value).map_err(convert)?.to_string()),
        VT_DISPATCH | VT_UNKNOWN_TAG => {
            let mut unknown = VARIANT::new();
            unsafe { VariantChangeType(&mut unknown, value, VAR_CHANGE_FLAGS(0), VT_UNKNOWN) }
                .map_err(convert)?;
            let unknown = IUnknown::try_from(&unknown).map_err(convert)?;
            Variant::Object(ComObject(unknown.cast().map_err(convert)?))
        }
        other => {
            return Err(HostError::Invoke {
                member: member.to_string(),
                message: format!("unsupported VARIANT type {}", other),
            });
        }
    })
}
