//! Backend driving `Word.Application` through late-bound COM calls.
//!
//! Word is only scriptable over COM on Windows; elsewhere construction fails
//! with `AutomationError::Unavailable`.

#[cfg(windows)]
pub use self::win::ComWord;

#[cfg(not(windows))]
pub use self::stub::ComWord;

#[cfg(windows)]
mod win {
    use crate::automation::{AutomationError, Statistic, WordService};
    use std::convert::TryFrom;
    use std::path::Path;
    use windows::core::{w, BSTR, GUID, PCWSTR, VARIANT};
    use windows::Win32::System::Com::{
        CLSIDFromProgID, CoCreateInstance, CoInitializeEx, CoUninitialize, IDispatch,
        CLSCTX_LOCAL_SERVER, COINIT_APARTMENTTHREADED, DISPATCH_FLAGS, DISPATCH_METHOD,
        DISPATCH_PROPERTYGET, DISPPARAMS,
    };

    const LOCALE_USER_DEFAULT: u32 = 0x0400;

    /// Word automation over COM. Constructing it initializes the COM
    /// apartment for the calling thread; dropping it uninitializes.
    pub struct ComWord {
        _apartment: Apartment,
    }

    impl ComWord {
        pub fn new() -> Result<Self, AutomationError> {
            Ok(Self {
                _apartment: Apartment::new()?,
            })
        }
    }

    struct Apartment;

    impl Apartment {
        fn new() -> Result<Self, AutomationError> {
            unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
                .ok()
                .map_err(|err| AutomationError::Unavailable(err.to_string()))?;
            Ok(Self)
        }
    }

    impl Drop for Apartment {
        fn drop(&mut self) {
            unsafe { CoUninitialize() };
        }
    }

    pub struct App {
        dispatch: IDispatch,
    }

    pub struct Doc {
        dispatch: IDispatch,
    }

    impl WordService for ComWord {
        type App = App;
        type Doc = Doc;

        fn launch(&self) -> Result<App, AutomationError> {
            let clsid = unsafe { CLSIDFromProgID(w!("Word.Application")) }.map_err(|err| {
                AutomationError::Unavailable(format!("Word.Application not registered: {}", err))
            })?;
            let dispatch = unsafe { CoCreateInstance(&clsid, None, CLSCTX_LOCAL_SERVER) }
                .map_err(|err| {
                    AutomationError::Unavailable(format!("could not start Word: {}", err))
                })?;
            Ok(App { dispatch })
        }

        fn open(&self, app: &App, path: &Path) -> Result<Doc, AutomationError> {
            let documents = get_object(&app.dispatch, "Documents")?;
            let file_name = BSTR::from(path.to_string_lossy().as_ref());
            let result = invoke(&documents, "Open", &mut [VARIANT::from(file_name)])?;
            let dispatch = IDispatch::try_from(&result).map_err(|err| {
                AutomationError::Call(format!("Open returned no document: {}", err))
            })?;
            Ok(Doc { dispatch })
        }

        fn compute_statistic(&self, doc: &Doc, stat: Statistic) -> Result<i32, AutomationError> {
            let result = invoke(
                &doc.dispatch,
                "ComputeStatistics",
                &mut [VARIANT::from(stat.code())],
            )?;
            i32::try_from(&result).map_err(|err| {
                AutomationError::Call(format!("ComputeStatistics returned a non-integer: {}", err))
            })
        }

        fn close(&self, doc: Doc, save_changes: bool) -> Result<(), AutomationError> {
            invoke(&doc.dispatch, "Close", &mut [VARIANT::from(save_changes)])?;
            Ok(())
        }

        fn quit(&self, app: App) -> Result<(), AutomationError> {
            invoke(&app.dispatch, "Quit", &mut [])?;
            Ok(())
        }
    }

    fn get_object(disp: &IDispatch, name: &str) -> Result<IDispatch, AutomationError> {
        let result = call(disp, name, DISPATCH_PROPERTYGET, &mut [])?;
        IDispatch::try_from(&result)
            .map_err(|err| AutomationError::Call(format!("{} is not an object: {}", name, err)))
    }

    fn invoke(disp: &IDispatch, name: &str, args: &mut [VARIANT]) -> Result<VARIANT, AutomationError> {
        call(disp, name, DISPATCH_METHOD, args)
    }

    fn call(
        disp: &IDispatch,
        name: &str,
        flags: DISPATCH_FLAGS,
        args: &mut [VARIANT],
    ) -> Result<VARIANT, AutomationError> {
        let id = dispid(disp, name)?;

        // IDispatch takes arguments in reverse order.
        args.reverse();
        let params = DISPPARAMS {
            rgvarg: args.as_mut_ptr(),
            cArgs: args.len() as u32,
            ..Default::default()
        };

        let mut result = VARIANT::default();
        unsafe {
            disp.Invoke(
                id,
                &GUID::zeroed(),
                LOCALE_USER_DEFAULT,
                flags,
                &params,
                Some(&mut result),
                None,
                None,
            )
        }
        .map_err(|err| AutomationError::Call(format!("{} failed: {}", name, err)))?;
        Ok(result)
    }

    fn dispid(disp: &IDispatch, name: &str) -> Result<i32, AutomationError> {
        let wide: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
        let names = PCWSTR(wide.as_ptr());
        let mut id = 0i32;
        unsafe { disp.GetIDsOfNames(&GUID::zeroed(), &names, 1, LOCALE_USER_DEFAULT, &mut id) }
            .map_err(|err| AutomationError::Call(format!("no member named {}: {}", name, err)))?;
        Ok(id)
    }
}

#[cfg(not(windows))]
mod stub {
    use crate::automation::{AutomationError, Statistic, WordService};
    use std::path::Path;

    /// Stand-in for platforms without the COM bridge. Construction fails, so
    /// the service methods below are never reached at runtime.
    pub struct ComWord;

    impl ComWord {
        pub fn new() -> Result<Self, AutomationError> {
            Err(unavailable())
        }
    }

    impl WordService for ComWord {
        type App = ();
        type Doc = ();

        fn launch(&self) -> Result<(), AutomationError> {
            Err(unavailable())
        }

        fn open(&self, _app: &(), _path: &Path) -> Result<(), AutomationError> {
            Err(unavailable())
        }

        fn compute_statistic(&self, _doc: &(), _stat: Statistic) -> Result<i32, AutomationError> {
            Err(unavailable())
        }

        fn close(&self, _doc: (), _save_changes: bool) -> Result<(), AutomationError> {
            Err(unavailable())
        }

        fn quit(&self, _app: ()) -> Result<(), AutomationError> {
            Err(unavailable())
        }
    }

    fn unavailable() -> AutomationError {
        AutomationError::Unavailable("Word COM automation is only available on Windows".into())
    }
}
